//! Chart Plotter Module
//! Draws bar charts using egui_plot.

use super::BarChartData;
use egui::{RichText, Stroke};
use egui_plot::{Bar, BarChart, Plot};

/// Bar width in x-axis units (one unit per category).
const BAR_WIDTH: f64 = 0.6;

/// Creates bar chart visualizations using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Build one bar per category, colored by the chart's palette.
    pub fn bars(chart: &BarChartData) -> Vec<Bar> {
        let count = chart.bars.len();
        chart
            .bars
            .iter()
            .enumerate()
            .map(|(i, (label, mean))| {
                let color = chart.palette.color(i, count);
                Bar::new(i as f64, *mean)
                    .name(label)
                    .width(BAR_WIDTH)
                    .fill(color.gamma_multiply(0.85))
                    .stroke(Stroke::new(1.0, color))
            })
            .collect()
    }

    /// Draw a titled bar chart filling the available space.
    /// X-axis: categories, Y-axis: mean value
    pub fn draw_bar_chart(ui: &mut egui::Ui, chart: &BarChartData) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&chart.title).strong().size(16.0));
        });

        let x_labels = chart.labels();
        let bars = Self::bars(chart);

        Plot::new(format!("bar_{}", chart.id))
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                // Only label integral ticks, which sit under the bars
                let idx = mark.value.round();
                if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                    return String::new();
                }
                x_labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name(chart.y_label.clone()));
            });
    }
}
