//! Insurance Report - CSV processing, summary analysis & daily chart refresh
//!
//! Loads `insurance.csv`, normalizes its numeric columns, writes
//! `processed_insurance.csv`, logs a summary to `analysis_log.txt`, shows the
//! comparison charts, and repeats the analysis every day at 09:00.

mod charts;
mod config;
mod data;
mod error;
mod gui;
mod logging;
mod pipeline;
mod schedule;
mod stats;

use anyhow::Result;
use config::{ReportConfig, CONFIG_FILE};
use gui::NativeDisplay;
use pipeline::Pipeline;
use schedule::{CancellationToken, SystemClock};
use std::path::Path;
use tracing::error;

fn main() -> Result<()> {
    let config = ReportConfig::load_or_default(Path::new(CONFIG_FILE))?;
    logging::init(&config.log_path)?;

    let display = NativeDisplay::default();
    let cancel = CancellationToken::new();

    if let Err(err) = Pipeline::new(&config, &display).run(&SystemClock, &cancel) {
        error!("Fatal {:?} error: {}", err.kind(), err);
        return Err(err.into());
    }
    Ok(())
}
