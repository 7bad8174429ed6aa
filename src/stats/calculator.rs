//! Statistics Calculator Module
//! Summary queries over the insurance table and per-category means.

use crate::data::{require_column, AGE, CHARGES, REGION, SEX};
use crate::error::ReportError;
use polars::prelude::*;
use statrs::statistics::Statistics;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use tracing::info;

/// Round to 2 decimal places, halves away from zero.
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Category label → row count, most frequent first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueCounts(Vec<(String, usize)>);

impl ValueCounts {
    /// Count non-null labels; ties keep first-encounter order.
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for label in labels.into_iter().flatten() {
            match positions.get(&label) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    positions.insert(label.clone(), counts.len());
                    counts.push((label, 1));
                }
            }
        }

        // Stable sort preserves encounter order among equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Self(counts)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

#[cfg(test)]
impl ValueCounts {
    pub fn get(&self, label: &str) -> Option<usize> {
        self.iter()
            .find(|(name, _)| *name == label)
            .map(|(_, count)| count)
    }
}

impl fmt::Display for ValueCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': {}", name, count)?;
        }
        write!(f, "}}")
    }
}

/// A single table cell, detached from the DataFrame.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<AnyValue<'_>> for Cell {
    fn from(value: AnyValue<'_>) -> Self {
        match value {
            AnyValue::Null => Cell::Null,
            AnyValue::Boolean(v) => Cell::Bool(v),
            AnyValue::Int8(v) => Cell::Int(v.into()),
            AnyValue::Int16(v) => Cell::Int(v.into()),
            AnyValue::Int32(v) => Cell::Int(v.into()),
            AnyValue::Int64(v) => Cell::Int(v),
            AnyValue::UInt8(v) => Cell::Int(v.into()),
            AnyValue::UInt16(v) => Cell::Int(v.into()),
            AnyValue::UInt32(v) => Cell::Int(v.into()),
            AnyValue::UInt64(v) => i64::try_from(v)
                .map(Cell::Int)
                .unwrap_or(Cell::Float(v as f64)),
            AnyValue::Float32(v) => Cell::Float(v.into()),
            AnyValue::Float64(v) => Cell::Float(v),
            AnyValue::String(v) => Cell::Str(v.to_string()),
            AnyValue::StringOwned(v) => Cell::Str(v.to_string()),
            other => Cell::Str(other.to_string()),
        }
    }
}

/// Whole table as an ordered mapping of column name → column values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableDict {
    columns: Vec<(String, Vec<Cell>)>,
}

impl TableDict {
    #[cfg(test)]
    pub fn get(&self, column: &str) -> Option<&[Cell]> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, values)| values.as_slice())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Derived summary of one analysis run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryReport {
    pub average_age: f64,
    pub sex_distribution: ValueCounts,
    pub unique_regions: Vec<String>,
    pub average_charges: f64,
}

impl SummaryReport {
    /// Log each figure, collections written as `{'label': n}` / `['a', 'b']`.
    pub fn log(&self) {
        info!("Average Patient Age: {:?} years", self.average_age);
        info!("Sex Distribution: {}", self.sex_distribution);
        info!("Average Yearly Charges: ${:?}", self.average_charges);
        info!("Unique Regions: {}", quoted_list(&self.unique_regions));
    }
}

/// `['a', 'b']`, quoted the same way as [`ValueCounts`] labels.
fn quoted_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{}'", item)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Read-only queries over a patient table.
pub struct PatientsInfo<'a> {
    df: &'a DataFrame,
}

impl<'a> PatientsInfo<'a> {
    pub fn new(df: &'a DataFrame) -> Self {
        Self { df }
    }

    /// Average age, 2 decimal places.
    pub fn analyze_ages(&self) -> Result<f64, ReportError> {
        let ages = numeric_values(self.df, AGE)?;
        Ok(round_2dp(ages.iter().flatten().mean()))
    }

    /// Row count per sex label.
    pub fn analyze_sexes(&self) -> Result<ValueCounts, ReportError> {
        Ok(ValueCounts::from_labels(label_values(self.df, SEX)?))
    }

    /// Distinct regions in first-encounter order.
    pub fn unique_regions(&self) -> Result<Vec<String>, ReportError> {
        let mut seen = HashSet::new();
        Ok(label_values(self.df, REGION)?
            .into_iter()
            .flatten()
            .filter(|region| seen.insert(region.clone()))
            .collect())
    }

    /// Average charges, 2 decimal places.
    pub fn average_charges(&self) -> Result<f64, ReportError> {
        let charges = numeric_values(self.df, CHARGES)?;
        Ok(round_2dp(charges.iter().flatten().mean()))
    }

    /// The whole table as column name → values.
    pub fn create_dictionary(&self) -> TableDict {
        let columns = self
            .df
            .get_columns()
            .iter()
            .map(|col| {
                let series = col.as_materialized_series();
                let values = (0..series.len())
                    .map(|i| series.get(i).map(Cell::from).unwrap_or(Cell::Null))
                    .collect();
                (col.name().to_string(), values)
            })
            .collect();
        TableDict { columns }
    }

    pub fn summarize(&self) -> Result<SummaryReport, ReportError> {
        Ok(SummaryReport {
            average_age: self.analyze_ages()?,
            sex_distribution: self.analyze_sexes()?,
            unique_regions: self.unique_regions()?,
            average_charges: self.average_charges()?,
        })
    }
}

/// Handles grouped aggregations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Mean of `value` per distinct `category`, categories in ascending order.
    ///
    /// Rows where either side is null are skipped.
    pub fn mean_by_category(
        df: &DataFrame,
        category: &str,
        value: &str,
    ) -> Result<Vec<(String, f64)>, ReportError> {
        let labels = label_values(df, category)?;
        let values = numeric_values(df, value)?;

        let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for (label, v) in labels.into_iter().zip(values) {
            if let (Some(label), Some(v)) = (label, v) {
                groups.entry(label).or_default().push(v);
            }
        }

        Ok(groups
            .into_iter()
            .map(|(label, values)| (label, values.iter().mean()))
            .collect())
    }
}

fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, ReportError> {
    let series = require_column(df, name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.into_iter().collect())
}

fn label_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, ReportError> {
    let series = require_column(df, name)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    Ok(series
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_owned))
        .collect())
}
