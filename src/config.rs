//! Configuration Module
//! Paths, schedule and snapshot policy, with defaults matching the fixed layout
//! of the working directory. An optional JSON file may override any field.

use crate::error::ReportError;
use crate::schedule::DailyTrigger;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Optional override file, looked up in the working directory.
pub const CONFIG_FILE: &str = "insurance_report.json";

/// What the daily job analyzes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotPolicy {
    /// Re-analyze the table loaded at startup.
    #[default]
    Snapshot,
    /// Reload and re-process the input file before each run.
    Reload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub log_path: PathBuf,
    /// Local time of the daily run, `HH:MM`.
    pub schedule_at: String,
    pub poll_interval_secs: u64,
    pub snapshot_policy: SnapshotPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("insurance.csv"),
            output_path: PathBuf::from("processed_insurance.csv"),
            log_path: PathBuf::from("analysis_log.txt"),
            schedule_at: "09:00".to_string(),
            poll_interval_secs: 1,
            snapshot_policy: SnapshotPolicy::Snapshot,
        }
    }
}

impl ReportConfig {
    /// Read `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ReportError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ReportError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = serde_json::from_str(&text).map_err(|e| ReportError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ReportError> {
        if self.poll_interval_secs == 0 {
            return Err(ReportError::Config {
                path: path.to_path_buf(),
                reason: "poll_interval_secs must be at least 1".to_string(),
            });
        }
        self.trigger().map(|_| ()).map_err(|err| match err {
            ReportError::Config { reason, .. } => ReportError::Config {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    pub fn trigger(&self) -> Result<DailyTrigger, ReportError> {
        DailyTrigger::parse(&self.schedule_at).map_err(|e| ReportError::Config {
            path: PathBuf::from(CONFIG_FILE),
            reason: format!("schedule_at '{}': {}", self.schedule_at, e),
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}
