//! Chart Window
//! One native window per chart; each blocks until the user closes it.

use crate::charts::{BarChartData, ChartDisplay, ChartPlotter};
use crate::error::ReportError;
use eframe::egui;
use tracing::info;

/// Default figure size in logical pixels.
const FIGURE_SIZE: [f32; 2] = [800.0, 500.0];

/// Window showing a single bar chart.
pub struct ChartWindow {
    chart: BarChartData,
}

impl ChartWindow {
    pub fn new(chart: BarChartData) -> Self {
        Self { chart }
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ChartPlotter::draw_bar_chart(ui, &self.chart);
        });
    }
}

/// Shows charts in native eframe windows, one after another.
pub struct NativeDisplay {
    size: [f32; 2],
}

impl Default for NativeDisplay {
    fn default() -> Self {
        Self { size: FIGURE_SIZE }
    }
}

impl ChartDisplay for NativeDisplay {
    fn show(&self, charts: &[BarChartData]) -> Result<(), ReportError> {
        for chart in charts {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size(self.size)
                    .with_title(chart.title.clone()),
                ..Default::default()
            };

            info!("Showing chart '{}'", chart.title);
            let window = ChartWindow::new(chart.clone());
            eframe::run_native(
                &chart.id,
                options,
                Box::new(move |_cc| Ok(Box::new(window))),
            )
            .map_err(|e| ReportError::Render(e.to_string()))?;
        }
        Ok(())
    }
}
