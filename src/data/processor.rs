//! Data Processor Module
//! Coerces the numeric columns to fixed types.

use super::{require_column, AGE, CHARGES};
use crate::error::ReportError;
use polars::prelude::*;
use tracing::info;

/// Handles type normalization of the insurance table.
pub struct DataProcessor;

impl DataProcessor {
    /// Cast `charges` to Float64 and `age` to Int64.
    ///
    /// Either every row converts or the frame is rejected; unparseable text and
    /// missing values both count as failures.
    pub fn process(mut df: DataFrame) -> Result<DataFrame, ReportError> {
        let charges = Self::coerce(&df, CHARGES, DataType::Float64)?;
        let age = Self::coerce(&df, AGE, DataType::Int64)?;

        df.with_column(charges)?;
        df.with_column(age)?;

        info!("Data processed successfully.");
        Ok(df)
    }

    fn coerce(df: &DataFrame, name: &str, target: DataType) -> Result<Series, ReportError> {
        let series = require_column(df, name)?.as_materialized_series();

        // Non-strict cast turns unparseable values into nulls, so any null
        // left afterwards is either bad input or a missing entry.
        let cast = series.cast(&target)?;
        let invalid = cast.null_count();
        if invalid > 0 {
            return Err(ReportError::TypeConversion {
                column: name.to_string(),
                target: target.to_string(),
                invalid,
            });
        }

        Ok(cast)
    }
}
