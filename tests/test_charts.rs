//! Tests for chart data built from the Iris table

use iris_eda::charts::{
    cumulative_line, histogram, iris_charts, species_mean_bars, species_scatter, ChartBody,
    HISTOGRAM_BINS,
};
use iris_eda::pipeline::{
    add_species_column, PETAL_LENGTH, SEPAL_LENGTH, SEPAL_WIDTH, SPECIES_COLUMN,
};
use polars::prelude::DataFrame;

#[path = "common/mod.rs"]
mod common;

use common::*;

fn iris_with_species() -> DataFrame {
    let mut df = iris();
    add_species_column(&mut df).unwrap();
    df
}

#[test]
fn test_cumulative_line_ends_at_column_sum() {
    let chart = cumulative_line(&iris(), SEPAL_LENGTH).unwrap();
    assert_eq!(chart.title, "Cumulative Sepal Length Trend");
    assert_eq!(chart.x_label, "Index");
    assert_eq!(chart.y_label, "Cumulative Sepal Length (cm)");

    let ChartBody::Line { points } = chart.body else {
        panic!("expected a line chart");
    };
    assert_eq!(points.len(), 150);
    assert_eq!(points[0], [0.0, 5.1]);
    assert_eq!(points[149][0], 149.0);
    assert_close(points[149][1], 876.5, 1e-9);
    assert!(points.windows(2).all(|w| w[1][1] >= w[0][1]));
}

#[test]
fn test_species_mean_bars() {
    let chart = species_mean_bars(&iris_with_species(), PETAL_LENGTH).unwrap();
    assert_eq!(chart.title, "Average Petal Length by Species");
    assert_eq!(chart.x_label, "Species");
    assert_eq!(chart.y_label, "Average Petal Length (cm)");

    let ChartBody::Bars { bars } = chart.body else {
        panic!("expected a bar chart");
    };
    let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["setosa", "versicolor", "virginica"]);
    assert_close(bars[0].value, 1.462, 1e-9);
    assert_close(bars[1].value, 4.26, 1e-9);
    assert_close(bars[2].value, 5.552, 1e-9);
}

#[test]
fn test_bars_require_species_column() {
    let result = species_mean_bars(&iris(), PETAL_LENGTH);
    let err = result.unwrap_err();
    assert!(err.to_string().contains(SPECIES_COLUMN));
}

#[test]
fn test_sepal_width_histogram() {
    let chart = histogram(&iris(), SEPAL_WIDTH, HISTOGRAM_BINS).unwrap();
    assert_eq!(chart.title, "Distribution of Sepal Width");
    assert_eq!(chart.x_label, "Sepal Width (cm)");
    assert_eq!(chart.y_label, "Frequency");

    let ChartBody::Histogram(h) = chart.body else {
        panic!("expected a histogram");
    };
    assert_eq!(h.counts.len(), 20);
    assert_eq!(h.edges.len(), 21);
    assert_eq!(h.total(), 150);
    assert_close(h.edges[0], 2.0, 1e-9);
    assert_close(h.edges[20], 4.4, 1e-9);
    assert_close(h.bin_width(), 0.12, 1e-9);
    assert!(h.counts[0] >= 1);
    assert!(h.counts[19] >= 1);
}

#[test]
fn test_species_scatter() {
    let chart = species_scatter(&iris_with_species(), SEPAL_LENGTH, PETAL_LENGTH).unwrap();
    assert_eq!(chart.title, "Sepal Length vs Petal Length by Species");
    assert_eq!(chart.x_label, "Sepal Length (cm)");
    assert_eq!(chart.y_label, "Petal Length (cm)");
    assert_eq!(chart.legend_title.as_deref(), Some("Species"));

    let ChartBody::Scatter { series } = chart.body else {
        panic!("expected a scatter plot");
    };
    assert_eq!(series.len(), 3);
    assert!(series.iter().all(|s| s.points.len() == 50));
    assert_eq!(series[0].name, "setosa");
    assert_eq!(series[0].points[0], [5.1, 1.4]);
}

#[test]
fn test_charts_do_not_modify_table() {
    let df = iris_with_species();
    let before = df.clone();
    let charts = iris_charts(&df).unwrap();
    assert_eq!(charts.len(), 4);
    assert!(df.equals(&before));
}

#[test]
fn test_chart_summaries_mention_titles() {
    for chart in iris_charts(&iris_with_species()).unwrap() {
        assert!(chart.summary().starts_with(&chart.title));
    }
}
