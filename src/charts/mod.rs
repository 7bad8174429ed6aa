//! Charts module - Chart data, display and plotting

mod display;
mod figure;
mod plotter;

pub use display::{visualize_data, ChartDisplay};
pub use figure::BarChartData;
pub use plotter::ChartPlotter;

#[cfg(test)]
pub(crate) use display::recording;
