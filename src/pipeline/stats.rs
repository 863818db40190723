//! Descriptive statistics for numeric columns

use anyhow::{Context, Result};
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

/// Summary statistics of one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarise a slice of non-null values.
    ///
    /// An empty slice gives a zero count and NaN for every statistic.
    pub fn from_values(column: &str, values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Self {
                column: column.to_string(),
                count,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                median: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        Self {
            column: column.to_string(),
            count,
            mean,
            std,
            min: sorted[0],
            q25: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.5),
            q75: percentile(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }
}

/// Linear-interpolated percentile of an ascending slice, `p` in [0, 1]
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let idx = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = idx - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

/// Non-null values of a column as `f64`
pub fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<f64>> {
    let cast = df
        .column(column)
        .with_context(|| format!("Column '{}' not found", column))?
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' is not numeric", column))?;
    Ok(cast.f64()?.into_iter().flatten().collect())
}

/// Summary statistics for every numeric column, in column order.
///
/// Non-numeric columns (such as the derived species name) are skipped.
pub fn describe(df: &DataFrame) -> Result<Vec<ColumnSummary>> {
    let columns: Vec<(String, Vec<f64>)> = df
        .get_columns()
        .iter()
        .filter(|c| c.dtype().is_primitive_numeric())
        .map(|c| {
            let name = c.name().to_string();
            numeric_values(df, &name).map(|values| (name, values))
        })
        .collect::<Result<_>>()?;

    Ok(columns
        .par_iter()
        .map(|(name, values)| ColumnSummary::from_values(name, values))
        .collect())
}
