//! Charts module - build chart data from the table and display it

pub mod color;
pub mod model;
pub mod viewer;

pub use model::*;
pub use viewer::show_charts;

use anyhow::{bail, Context, Result};
use polars::prelude::*;

use crate::pipeline::{
    numeric_values, species_labels, PETAL_LENGTH, SEPAL_LENGTH, SEPAL_WIDTH,
};

/// Bins used by the sepal-width histogram
pub const HISTOGRAM_BINS: usize = 20;

/// Split "sepal length (cm)" into ("Sepal Length", "(cm)")
fn display_name(column: &str) -> (String, &str) {
    let (base, unit) = match column.find(" (") {
        Some(idx) => (&column[..idx], column[idx + 1..].trim()),
        None => (column, ""),
    };
    let title = base
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ");
    (title, unit)
}

fn with_unit(label: String, unit: &str) -> String {
    if unit.is_empty() {
        label
    } else {
        format!("{} {}", label, unit)
    }
}

/// Group row values by species, keeping the order in which species first appear
fn by_species<T>(labels: &[Option<String>], values: Vec<T>) -> Vec<(String, Vec<T>)> {
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();
    for (label, value) in labels.iter().zip(values) {
        let Some(label) = label else { continue };
        match groups.iter().position(|(name, _)| name == label) {
            Some(idx) => groups[idx].1.push(value),
            None => groups.push((label.clone(), vec![value])),
        }
    }
    groups
}

/// Running cumulative sum of `column` against row position.
///
/// Null rows contribute no point, but later points keep their own position.
pub fn cumulative_line(df: &DataFrame, column: &str) -> Result<Chart> {
    let cast = df
        .column(column)
        .with_context(|| format!("Column '{}' not found", column))?
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' is not numeric", column))?;
    let mut total = 0.0;
    let points: Vec<[f64; 2]> = cast
        .f64()?
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| {
            total += value?;
            Some([i as f64, total])
        })
        .collect();

    let (name, unit) = display_name(column);
    Ok(Chart {
        title: format!("Cumulative {} Trend", name),
        x_label: "Index".to_string(),
        y_label: with_unit(format!("Cumulative {}", name), unit),
        legend_title: None,
        body: ChartBody::Line { points },
    })
}

/// Mean of `column` per species, one bar each
pub fn species_mean_bars(df: &DataFrame, column: &str) -> Result<Chart> {
    let labels = species_labels(df)?;
    let values = numeric_values(df, column)?;
    if labels.len() != values.len() {
        bail!("Column '{}' contains missing values", column);
    }

    let bars = by_species(&labels, values)
        .into_iter()
        .map(|(label, values)| CategoryBar {
            value: values.iter().sum::<f64>() / values.len() as f64,
            label,
        })
        .collect();

    let (name, unit) = display_name(column);
    Ok(Chart {
        title: format!("Average {} by Species", name),
        x_label: "Species".to_string(),
        y_label: with_unit(format!("Average {}", name), unit),
        legend_title: None,
        body: ChartBody::Bars { bars },
    })
}

/// Count values into `bins` equal-width bins spanning [min, max].
///
/// Every bin is half-open except the last, which includes `max`. A column
/// with a single distinct value is binned over [value - 0.5, value + 0.5].
pub fn bin_values(values: &[f64], bins: usize) -> Histogram {
    if values.is_empty() || bins == 0 {
        return Histogram {
            edges: Vec::new(),
            counts: Vec::new(),
        };
    }

    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0usize; bins];
    for v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Histogram { edges, counts }
}

/// Distribution of `column` in `bins` equal-width bins
pub fn histogram(df: &DataFrame, column: &str, bins: usize) -> Result<Chart> {
    let values = numeric_values(df, column)?;
    let (name, unit) = display_name(column);
    Ok(Chart {
        title: format!("Distribution of {}", name),
        x_label: with_unit(name, unit),
        y_label: "Frequency".to_string(),
        legend_title: None,
        body: ChartBody::Histogram(bin_values(&values, bins)),
    })
}

/// `x` against `y`, one series per species
pub fn species_scatter(df: &DataFrame, x: &str, y: &str) -> Result<Chart> {
    let labels = species_labels(df)?;
    let xs = numeric_values(df, x)?;
    let ys = numeric_values(df, y)?;
    if xs.len() != labels.len() || ys.len() != labels.len() {
        bail!("Columns '{}' and '{}' must not contain missing values", x, y);
    }

    let points: Vec<[f64; 2]> = xs.into_iter().zip(ys).map(|(a, b)| [a, b]).collect();
    let series = by_species(&labels, points)
        .into_iter()
        .map(|(name, points)| ScatterSeries { name, points })
        .collect();

    let (x_name, x_unit) = display_name(x);
    let (y_name, y_unit) = display_name(y);
    Ok(Chart {
        title: format!("{} vs {} by Species", x_name, y_name),
        x_label: with_unit(x_name, x_unit),
        y_label: with_unit(y_name, y_unit),
        legend_title: Some("Species".to_string()),
        body: ChartBody::Scatter { series },
    })
}

/// The four exploratory charts, in display order
pub fn iris_charts(df: &DataFrame) -> Result<Vec<Chart>> {
    let charts = vec![
        cumulative_line(df, SEPAL_LENGTH)?,
        species_mean_bars(df, PETAL_LENGTH)?,
        histogram(df, SEPAL_WIDTH, HISTOGRAM_BINS)?,
        species_scatter(df, SEPAL_LENGTH, PETAL_LENGTH)?,
    ];
    for chart in &charts {
        log::debug!("Built chart: {}", chart.summary());
    }
    Ok(charts)
}
