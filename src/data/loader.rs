//! CSV Data Loader Module
//! Reads the insurance CSV into a DataFrame using Polars.

use crate::error::ReportError;
use polars::prelude::*;
use std::path::Path;
use tracing::info;

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a comma-delimited CSV file with a header row.
    pub fn load_csv(file_path: &Path) -> Result<DataFrame, ReportError> {
        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            // Infer from every row: a late non-numeric value must type the
            // column as text so the processor reports it, not the reader.
            .with_infer_schema_length(None)
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|source| ReportError::Read {
                path: file_path.to_path_buf(),
                source,
            })?;

        info!("Data loaded successfully.");
        info!(
            "Read {} rows from {}, columns {:?}",
            df.height(),
            file_path.display(),
            Self::get_columns(&df)
        );
        Ok(df)
    }

    /// Get list of column names from a DataFrame.
    pub fn get_columns(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{write_csv, INSURANCE_CSV};
    use crate::data::DataProcessor;
    use crate::error::ErrorKind;
    use crate::logging::capture::CapturedLog;
    use tempfile::tempdir;

    #[test]
    fn test_load_insurance_csv() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "insurance.csv", INSURANCE_CSV);

        let log = CapturedLog::default();
        let df = log.scoped(|| DataLoader::load_csv(&path)).unwrap();

        assert_eq!(df.height(), 4);
        assert_eq!(
            DataLoader::get_columns(&df),
            vec!["age", "sex", "bmi", "children", "smoker", "region", "charges"]
        );
        assert!(log.contents().contains("INFO - Data loaded successfully."));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = DataLoader::load_csv(&dir.path().join("absent.csv")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("absent.csv"));
    }

    /// 10 000 well-formed rows followed by `last_row`.
    fn long_csv(last_row: &str) -> String {
        let mut csv = String::from("age,sex,region,charges,smoker\n");
        for i in 0..10_000 {
            csv.push_str(&format!("{},male,west,{}.5,no\n", 20 + i % 40, 1000 + i));
        }
        csv.push_str(last_row);
        csv.push('\n');
        csv
    }

    #[test]
    fn test_late_non_numeric_charge_is_conversion_error() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "late.csv", &long_csv("31,female,east,abc,yes"));

        let df = DataLoader::load_csv(&path).unwrap();
        assert_eq!(df.height(), 10_001);

        let err = DataProcessor::process(df).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeConversion);
        assert!(err.to_string().contains("charges"));
    }

    #[test]
    fn test_late_float_age_still_coerces() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "late.csv", &long_csv("31.0,female,east,2500.0,yes"));

        let df = DataProcessor::process(DataLoader::load_csv(&path).unwrap()).unwrap();
        let age = df.column("age").unwrap();
        assert_eq!(age.dtype(), &DataType::Int64);
        assert_eq!(age.get(10_000).unwrap(), AnyValue::Int64(31));
    }

    #[test]
    fn test_extra_columns_pass_through() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "extra.csv",
            "age,sex,region,charges,smoker,policy_id\n40,female,west,100.5,no,A-1\n",
        );

        let df = DataLoader::load_csv(&path).unwrap();
        assert!(DataLoader::get_columns(&df).contains(&"policy_id".to_string()));
    }
}
