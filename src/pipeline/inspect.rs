//! Table inspection: preview rows, schema, missing values

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;

/// Name, type and completeness of one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub dtype: String,
    pub non_null: usize,
}

/// First `n` rows of the table (fewer if the table is shorter)
pub fn head(df: &DataFrame, n: usize) -> DataFrame {
    df.head(Some(n))
}

/// Per-column name, dtype and non-null count, in column order
pub fn schema(df: &DataFrame) -> Vec<ColumnInfo> {
    df.get_columns()
        .iter()
        .map(|column| ColumnInfo {
            name: column.name().to_string(),
            dtype: column.dtype().to_string(),
            non_null: column.len() - column.null_count(),
        })
        .collect()
}

/// Estimated in-memory size of the table in kilobytes
pub fn memory_kb(df: &DataFrame) -> f64 {
    df.estimated_size() as f64 / 1024.0
}

/// Null count per column, in column order
pub fn missing_counts(df: &DataFrame) -> Vec<(String, usize)> {
    df.get_columns()
        .iter()
        .map(|column| (column.name().to_string(), column.null_count()))
        .collect()
}

/// Return a new table without the rows that contain any null value.
pub fn drop_missing_rows(df: &DataFrame) -> Result<DataFrame> {
    let mut keep = BooleanChunked::full("keep".into(), true, df.height());
    for column in df.get_columns() {
        if column.null_count() > 0 {
            keep = &keep & &column.is_not_null();
        }
    }

    let cleaned = df
        .filter(&keep)
        .context("Failed to remove rows with missing values")?;

    let removed = df.height() - cleaned.height();
    if removed > 0 {
        log::info!("Removed {} row(s) with missing values", removed);
    }
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_counts_non_null() {
        let df = df! {
            "a" => [Some(1.0f64), None, Some(3.0)],
            "b" => [1i64, 2, 3],
        }
        .unwrap();

        let info = schema(&df);
        assert_eq!(info.len(), 2);
        assert_eq!(info[0].name, "a");
        assert_eq!(info[0].non_null, 2);
        assert_eq!(info[1].non_null, 3);
        assert_eq!(info[1].dtype, DataType::Int64.to_string());
    }

    #[test]
    fn test_head_shorter_than_request() {
        let df = df! { "a" => [1i64, 2] }.unwrap();
        assert_eq!(head(&df, 5).height(), 2);
    }

    #[test]
    fn test_drop_missing_rows_removes_any_null() {
        let df = df! {
            "a" => [Some(1.0f64), None, Some(3.0), Some(4.0)],
            "b" => [Some(1i64), Some(2), None, Some(4)],
        }
        .unwrap();

        let cleaned = drop_missing_rows(&df).unwrap();
        assert_eq!(cleaned.height(), 2);
        assert!(missing_counts(&cleaned).iter().all(|(_, n)| *n == 0));
    }
}
