//! Data module - CSV loading, type coercion and writing

mod loader;
mod processor;
mod writer;

pub use loader::DataLoader;
pub use processor::DataProcessor;
pub use writer::DataWriter;

use crate::error::ReportError;
use polars::prelude::*;

pub const AGE: &str = "age";
pub const SEX: &str = "sex";
pub const REGION: &str = "region";
pub const CHARGES: &str = "charges";
pub const SMOKER: &str = "smoker";

/// Look up a column, reporting its absence as [`ReportError::MissingColumn`].
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, ReportError> {
    df.column(name)
        .map_err(|_| ReportError::MissingColumn(name.to_string()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};

    pub const INSURANCE_CSV: &str = "\
age,sex,bmi,children,smoker,region,charges
19,female,27.9,0,yes,southwest,16884.924
18,male,33.77,1,no,southeast,1725.5523
28,male,33.0,3,no,southeast,4449.462
33,male,22.705,0,no,northwest,21984.47061
";

    pub fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }
}
