//! Pipeline Module
//! Startup ETL, the analysis step, and the daily re-analysis loop.

use crate::charts::{visualize_data, ChartDisplay};
use crate::config::{ReportConfig, SnapshotPolicy};
use crate::data::{DataLoader, DataProcessor, DataWriter};
use crate::error::{ReportError, Stage};
use crate::schedule::{CancellationToken, Clock, Scheduler};
use crate::stats::{PatientsInfo, SummaryReport};
use polars::prelude::DataFrame;
use tracing::info;

/// Drives load → process → save → analyze, then re-analyzes daily.
pub struct Pipeline<'a> {
    config: &'a ReportConfig,
    display: &'a dyn ChartDisplay,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a ReportConfig, display: &'a dyn ChartDisplay) -> Self {
        Self { config, display }
    }

    /// Load and coerce the input file.
    pub fn load(&self) -> Result<DataFrame, ReportError> {
        let df = Stage::Load.settle(DataLoader::load_csv(&self.config.input_path))?;
        Stage::Transform.settle(DataProcessor::process(df))
    }

    /// Load, coerce and write the processed copy.
    pub fn prepare(&self) -> Result<DataFrame, ReportError> {
        let mut df = self.load()?;
        Stage::Persist.settle(DataWriter::save_csv(&mut df, &self.config.output_path))?;
        Ok(df)
    }

    /// Log the summary of `df` and show its charts.
    pub fn automated_analysis(&self, df: &DataFrame) -> Result<SummaryReport, ReportError> {
        let patients = PatientsInfo::new(df);
        let report = Stage::Analyze.settle(patients.summarize())?;
        report.log();

        let records = patients.create_dictionary();
        info!(
            "Patient records: {} columns ({})",
            records.column_count(),
            records.column_names().join(", ")
        );
        visualize_data(df, self.display);
        Ok(report)
    }

    fn scheduled_analysis(&self, snapshot: &DataFrame) -> Result<(), ReportError> {
        match self.config.snapshot_policy {
            SnapshotPolicy::Snapshot => self.automated_analysis(snapshot)?,
            SnapshotPolicy::Reload => self.automated_analysis(&self.load()?)?,
        };
        Ok(())
    }

    /// Run startup once, then poll the daily schedule until `cancel` is set.
    pub fn run<C: Clock>(&self, clock: &C, cancel: &CancellationToken) -> Result<(), ReportError> {
        info!("Starting insurance report");
        let snapshot = self.prepare()?;
        self.automated_analysis(&snapshot)?;

        let trigger = self.config.trigger()?;
        let mut scheduler = Scheduler::new();
        let first = scheduler.every_day_at(trigger, clock.now(), move || {
            self.scheduled_analysis(&snapshot)
        });
        info!(
            "Daily analysis scheduled at {} ({:?}), first run {}",
            trigger, self.config.snapshot_policy, first
        );

        scheduler.run_until_cancelled(clock, self.config.poll_interval(), cancel)
    }
}
