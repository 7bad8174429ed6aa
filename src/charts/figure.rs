//! Bar chart descriptions built from the insurance table.

use crate::data::{CHARGES, REGION, SMOKER};
use crate::error::ReportError;
use crate::stats::StatsCalculator;
use egui::Color32;
use polars::prelude::DataFrame;

/// Light and dark ends of the sequential blue ramp.
const BLUES_LIGHT: [u8; 3] = [198, 219, 239];
const BLUES_DARK: [u8; 3] = [8, 81, 156];

/// Qualitative palette for unordered categories.
pub const SET1: [Color32; 9] = [
    Color32::from_rgb(228, 26, 28),   // Red
    Color32::from_rgb(55, 126, 184),  // Blue
    Color32::from_rgb(77, 175, 74),   // Green
    Color32::from_rgb(152, 78, 163),  // Purple
    Color32::from_rgb(255, 127, 0),   // Orange
    Color32::from_rgb(255, 255, 51),  // Yellow
    Color32::from_rgb(166, 86, 40),   // Brown
    Color32::from_rgb(247, 129, 191), // Pink
    Color32::from_rgb(153, 153, 153), // Grey
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Sequential light-to-dark blues.
    Blues,
    /// Cycling qualitative colors.
    Set1,
}

impl Palette {
    /// Color of bar `index` out of `count`.
    pub fn color(self, index: usize, count: usize) -> Color32 {
        match self {
            Palette::Blues => {
                let t = if count > 1 {
                    index as f32 / (count - 1) as f32
                } else {
                    0.5
                };
                let channel = |i: usize| {
                    let light = BLUES_LIGHT[i] as f32;
                    let dark = BLUES_DARK[i] as f32;
                    (light + (dark - light) * t).round() as u8
                };
                Color32::from_rgb(channel(0), channel(1), channel(2))
            }
            Palette::Set1 => SET1[index % SET1.len()],
        }
    }
}

/// One bar chart: categories on x, a mean value per category on y.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartData {
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
    pub palette: Palette,
}

impl BarChartData {
    pub fn labels(&self) -> Vec<String> {
        self.bars.iter().map(|(label, _)| label.clone()).collect()
    }
}

/// The two comparison charts: charges by region and by smoker status.
pub fn build_charts(df: &DataFrame) -> Result<Vec<BarChartData>, ReportError> {
    let by_region = BarChartData {
        id: "region_charges".to_string(),
        title: "Average Medical Insurance Charges by Region".to_string(),
        x_label: "Region".to_string(),
        y_label: "Average Charges ($)".to_string(),
        bars: StatsCalculator::mean_by_category(df, REGION, CHARGES)?,
        palette: Palette::Blues,
    };

    let by_smoker = BarChartData {
        id: "smoker_charges".to_string(),
        title: "Average Charges by Smoking Status".to_string(),
        x_label: "Smoker Status".to_string(),
        y_label: "Average Charges ($)".to_string(),
        bars: StatsCalculator::mean_by_category(df, SMOKER, CHARGES)?,
        palette: Palette::Set1,
    };

    Ok(vec![by_region, by_smoker])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use polars::prelude::*;

    #[test]
    fn test_build_charts() {
        let df = df!(
            "region" => ["west", "east", "west"],
            "smoker" => ["yes", "no", "no"],
            "charges" => [300.0, 100.0, 200.0],
        )
        .unwrap();

        let charts = build_charts(&df).unwrap();
        assert_eq!(charts.len(), 2);

        assert_eq!(charts[0].id, "region_charges");
        assert_eq!(charts[0].x_label, "Region");
        assert_eq!(
            charts[0].bars,
            vec![("east".to_string(), 100.0), ("west".to_string(), 250.0)]
        );

        assert_eq!(charts[1].title, "Average Charges by Smoking Status");
        assert_eq!(charts[1].labels(), vec!["no", "yes"]);
        assert_eq!(charts[1].bars[0].1, 150.0);
    }

    #[test]
    fn test_missing_smoker_column() {
        let df = df!("region" => ["west"], "charges" => [1.0]).unwrap();
        let err = build_charts(&df).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Key);
    }

    #[test]
    fn test_blues_ramp() {
        assert_eq!(Palette::Blues.color(0, 4), Color32::from_rgb(198, 219, 239));
        assert_eq!(Palette::Blues.color(3, 4), Color32::from_rgb(8, 81, 156));
        assert_eq!(Palette::Blues.color(0, 1), Color32::from_rgb(103, 150, 198));
    }

    #[test]
    fn test_set1_cycles() {
        assert_eq!(Palette::Set1.color(0, 2), SET1[0]);
        assert_eq!(Palette::Set1.color(9, 12), SET1[0]);
    }
}
