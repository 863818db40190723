//! Shared test utilities and fixture generators

#![allow(dead_code)]

use iris_eda::pipeline::{expected_columns, load_iris, DatasetSource, IRIS_CSV};
use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// The embedded Iris table, freshly loaded
pub fn iris() -> DataFrame {
    load_iris(&DatasetSource::Embedded).unwrap()
}

/// Write `contents` to a CSV file in a fresh temporary directory
pub fn create_temp_csv(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("iris.csv");
    std::fs::write(&csv_path, contents).unwrap();
    (temp_dir, csv_path)
}

/// A copy of the embedded CSV on disk
pub fn create_iris_csv() -> (TempDir, PathBuf) {
    create_temp_csv(IRIS_CSV)
}

/// Iris-format CSV with only the first `rows` samples
pub fn truncated_iris_csv(rows: usize) -> String {
    IRIS_CSV
        .lines()
        .take(rows + 1)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Iris-format CSV where the class code of the last row is replaced
pub fn iris_csv_with_last_code(code: &str) -> String {
    let mut lines: Vec<String> = IRIS_CSV
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect();
    if let Some(last) = lines.last_mut() {
        let (values, _) = last.rsplit_once(',').unwrap();
        *last = format!("{},{}", values, code);
    }
    lines.join("\n")
}

/// Iris-format CSV where the first measurement of the first sample is replaced
pub fn iris_csv_with_first_value(value: &str) -> String {
    let mut lines: Vec<String> = IRIS_CSV.lines().map(str::to_string).collect();
    let (_, rest) = lines[1].split_once(',').unwrap();
    lines[1] = format!("{},{}", value, rest);
    lines.join("\n")
}

/// Small frame in Iris layout with a gap in every column
pub fn create_missing_test_dataframe() -> DataFrame {
    let names = expected_columns();
    df! {
        names[0] => [Some(5.1f64), None, Some(6.3), Some(5.8)],
        names[1] => [Some(3.5f64), Some(3.0), None, Some(2.7)],
        names[2] => [Some(1.4f64), Some(1.4), Some(6.0), None],
        names[3] => [Some(0.2f64), Some(0.2), Some(2.5), Some(1.9)],
        names[4] => [Some(0i64), Some(0), Some(2), Some(2)],
    }
    .unwrap()
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(rows, expected_rows, "Row count mismatch: expected {}, got {}", expected_rows, rows);
    assert_eq!(cols, expected_cols, "Column count mismatch: expected {}, got {}", expected_cols, cols);
}

/// Assert two floats agree to `tol`
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {} (±{}), got {}",
        expected,
        tol,
        actual
    );
}
