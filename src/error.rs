//! Error Module
//! Error taxonomy shared by every stage, plus the per-stage failure policy.

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("cannot convert column '{column}' to {target}: {invalid} invalid value(s)")]
    TypeConversion {
        column: String,
        target: String,
        invalid: usize,
    },
    #[error("missing column '{0}'")]
    MissingColumn(String),
    #[error("rendering failed: {0}")]
    Render(String),
    #[error("invalid configuration {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Coarse classification of a [`ReportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    TypeConversion,
    Key,
    Render,
    Config,
    /// Frame-level failures (shape, schema) not tied to one value.
    Data,
}

impl ReportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::Read { .. } | ReportError::Io { .. } | ReportError::Write { .. } => {
                ErrorKind::Io
            }
            ReportError::TypeConversion { .. } => ErrorKind::TypeConversion,
            ReportError::Polars(source) => match source {
                // Raised by `cast` for a dtype pair it cannot convert
                PolarsError::InvalidOperation(_) => ErrorKind::TypeConversion,
                PolarsError::ColumnNotFound(_) => ErrorKind::Key,
                PolarsError::IO { .. } => ErrorKind::Io,
                _ => ErrorKind::Data,
            },
            ReportError::MissingColumn(_) => ErrorKind::Key,
            ReportError::Render(_) => ErrorKind::Render,
            ReportError::Config { .. } => ErrorKind::Config,
        }
    }
}

/// What happens to a stage's error once it has been logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    Propagate,
    LogAndContinue,
}

/// Pipeline stages, each with a fixed failure policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Transform,
    Persist,
    Analyze,
    Visualize,
}

impl Stage {
    pub fn policy(self) -> ErrorPolicy {
        match self {
            Stage::Load | Stage::Transform | Stage::Persist | Stage::Analyze => {
                ErrorPolicy::Propagate
            }
            Stage::Visualize => ErrorPolicy::LogAndContinue,
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Stage::Load => "Error loading data",
            Stage::Transform => "Error processing data",
            Stage::Persist => "Error saving data",
            Stage::Analyze => "Error analyzing data",
            Stage::Visualize => "Error creating visualizations",
        }
    }

    /// Log a failed stage result, then apply the stage's policy.
    ///
    /// Swallowed failures yield `T::default()`.
    pub fn settle<T: Default>(self, result: Result<T, ReportError>) -> Result<T, ReportError> {
        match result {
            Ok(value) => Ok(value),
            Err(err) => {
                error!("{}: {}", self.failure_message(), err);
                match self.policy() {
                    ErrorPolicy::Propagate => Err(err),
                    ErrorPolicy::LogAndContinue => Ok(T::default()),
                }
            }
        }
    }
}
