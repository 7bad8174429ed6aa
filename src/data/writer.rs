//! CSV Data Writer Module
//! Writes a DataFrame back to CSV: header row, no index column.

use crate::error::ReportError;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Handles CSV serialization with Polars.
pub struct DataWriter;

impl DataWriter {
    /// Write `df` to `file_path`, replacing any existing file.
    pub fn save_csv(df: &mut DataFrame, file_path: &Path) -> Result<(), ReportError> {
        let mut file = File::create(file_path).map_err(|source| ReportError::Io {
            path: file_path.to_path_buf(),
            source,
        })?;

        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .map_err(|source| ReportError::Write {
                path: file_path.to_path_buf(),
                source,
            })?;

        info!("Processed data saved to {}.", file_path.display());
        Ok(())
    }
}
