use anyhow::{anyhow, Result};
use eframe::egui::{self, Color32, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use super::color::{generate_palette, SKY_BLUE};
use super::model::{Chart, ChartBody};

// ---------------------------------------------------------------------------
// Chart window
// ---------------------------------------------------------------------------

/// Steps through the charts one at a time; closing the window ends the run.
pub struct ChartViewer {
    charts: Vec<Chart>,
    current: usize,
}

impl ChartViewer {
    pub fn new(charts: Vec<Chart>) -> Self {
        Self { charts, current: 0 }
    }

    fn is_last(&self) -> bool {
        self.current + 1 >= self.charts.len()
    }
}

impl eframe::App for ChartViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Bottom panel: navigation ----
        egui::TopBottomPanel::bottom("navigation").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let back = ui.add_enabled(self.current > 0, egui::Button::new("◀ Previous"));
                if back.clicked() {
                    self.current -= 1;
                }

                ui.label(format!("Chart {} of {}", self.current + 1, self.charts.len()));

                let label = if self.is_last() { "Close" } else { "Next ▶" };
                if ui.button(label).clicked() {
                    if self.is_last() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    } else {
                        self.current += 1;
                    }
                }
            });
        });

        // ---- Central panel: current chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let chart = &self.charts[self.current];
            ui.vertical_centered(|ui| {
                ui.heading(&chart.title);
            });
            if let Some(title) = &chart.legend_title {
                ui.label(format!("Legend: {}", title));
            }
            chart_plot(ui, chart, self.current);
        });
    }
}

/// Render one chart into the given area.
fn chart_plot(ui: &mut Ui, chart: &Chart, id: usize) {
    let mut plot = Plot::new(("chart", id))
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .allow_drag(true)
        .allow_zoom(true);

    if chart.legend_title.is_some() {
        plot = plot.legend(Legend::default());
    }

    if let ChartBody::Bars { bars } = &chart.body {
        let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();
        plot = plot.x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if idx < 0.0 || (mark.value - idx).abs() > 1e-6 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        });
    }

    plot.show(ui, |plot_ui| match &chart.body {
        ChartBody::Line { points } => {
            plot_ui.line(Line::new(PlotPoints::new(points.clone())).width(1.5));
        }
        ChartBody::Bars { bars } => {
            let colors = generate_palette(bars.len());
            let bars: Vec<Bar> = bars
                .iter()
                .zip(colors)
                .enumerate()
                .map(|(i, (bar, color))| {
                    Bar::new(i as f64, bar.value)
                        .width(0.6)
                        .name(&bar.label)
                        .fill(color)
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars));
        }
        ChartBody::Histogram(histogram) => {
            let width = histogram.bin_width();
            let bars: Vec<Bar> = histogram
                .counts
                .iter()
                .enumerate()
                .map(|(i, &count)| {
                    Bar::new(histogram.center(i), count as f64)
                        .width(width)
                        .fill(SKY_BLUE)
                        .stroke(Stroke::new(1.0, Color32::BLACK))
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars));
        }
        ChartBody::Scatter { series } => {
            let colors = generate_palette(series.len());
            for (s, color) in series.iter().zip(colors) {
                plot_ui.points(
                    Points::new(PlotPoints::new(s.points.clone()))
                        .name(&s.name)
                        .color(color)
                        .radius(3.0),
                );
            }
        }
    });
}

/// Open the chart window and block until it is closed.
pub fn show_charts(charts: Vec<Chart>) -> Result<()> {
    if charts.is_empty() {
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 560.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    log::debug!("Opening chart window with {} chart(s)", charts.len());
    eframe::run_native(
        "iris-eda – Charts",
        options,
        Box::new(|_cc| Ok(Box::new(ChartViewer::new(charts)))),
    )
    .map_err(|e| anyhow!("Failed to open chart window: {}", e))
}
