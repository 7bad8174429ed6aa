//! Chart display sink and the log-and-continue visualization step.

use super::figure::{build_charts, BarChartData};
use crate::error::{ReportError, Stage};
use polars::prelude::DataFrame;

/// Somewhere rendered charts can be shown.
pub trait ChartDisplay {
    fn show(&self, charts: &[BarChartData]) -> Result<(), ReportError>;
}

/// Build both comparison charts and show them.
///
/// Failures are logged and swallowed; the caller always continues.
pub fn visualize_data(df: &DataFrame, display: &dyn ChartDisplay) {
    let result = build_charts(df).and_then(|charts| display.show(&charts));
    // Visualize never propagates
    let _ = Stage::Visualize.settle(result);
}
