//! Statistics module - Summary analysis and grouped means

mod calculator;

pub use calculator::{PatientsInfo, StatsCalculator, SummaryReport};
