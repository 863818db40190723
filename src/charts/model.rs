//! Chart data independent of any rendering surface

use serde::Serialize;

/// One titled, axis-labelled chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Heading shown above the legend, for charts that have one
    pub legend_title: Option<String>,
    pub body: ChartBody,
}

/// What a chart draws
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartBody {
    /// Connected line through `[x, y]` points
    Line { points: Vec<[f64; 2]> },
    /// One bar per category
    Bars { bars: Vec<CategoryBar> },
    /// Equal-width bins
    Histogram(Histogram),
    /// Point clouds, one per named series
    Scatter { series: Vec<ScatterSeries> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBar {
    pub label: String,
    pub value: f64,
}

/// Bin edges (`counts.len() + 1` of them) and counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Width shared by every bin
    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if !self.counts.is_empty() => (hi - lo) / self.counts.len() as f64,
            _ => 0.0,
        }
    }

    /// Midpoint of bin `i`
    pub fn center(&self, i: usize) -> f64 {
        (self.edges[i] + self.edges[i + 1]) / 2.0
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

impl Chart {
    /// One-line description used when charts are not displayed
    pub fn summary(&self) -> String {
        let detail = match &self.body {
            ChartBody::Line { points } => match points.last() {
                Some([x, y]) => format!("{} points, ends at ({}, {:.2})", points.len(), x, y),
                None => "no points".to_string(),
            },
            ChartBody::Bars { bars } => bars
                .iter()
                .map(|b| format!("{}={:.3}", b.label, b.value))
                .collect::<Vec<_>>()
                .join(", "),
            ChartBody::Histogram(h) => format!(
                "{} bins of width {:.3}, {} values",
                h.counts.len(),
                h.bin_width(),
                h.total()
            ),
            ChartBody::Scatter { series } => series
                .iter()
                .map(|s| format!("{} ({} points)", s.name, s.points.len()))
                .collect::<Vec<_>>()
                .join(", "),
        };
        format!("{} [{} / {}]: {}", self.title, self.x_label, self.y_label, detail)
    }
}
