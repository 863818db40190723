//! Per-class aggregation and the derived species column

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;

use super::dataset::{species_name, SPECIES_COLUMN, TARGET_COLUMN};

const COUNT_ALIAS: &str = "__count";

/// Means of the value columns within one class code
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMeans {
    pub code: i64,
    pub species: Option<String>,
    pub count: usize,
    /// (column, mean) in table column order
    pub means: Vec<(String, f64)>,
}

impl GroupMeans {
    /// Mean of a column within this group
    pub fn mean(&self, column: &str) -> Option<f64> {
        self.means
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, mean)| *mean)
    }
}

/// Observed range of a column within one class code
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupExtent {
    pub code: i64,
    pub min: f64,
    pub max: f64,
}

/// Numeric columns other than the class code
fn value_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|c| c.dtype().is_primitive_numeric() && c.name().as_str() != TARGET_COLUMN)
        .map(|c| c.name().to_string())
        .collect()
}

/// Aggregate `exprs` per class code, sorted by code ascending
fn aggregate_by_code(df: &DataFrame, exprs: Vec<Expr>) -> Result<DataFrame> {
    df.clone()
        .lazy()
        .group_by([col(TARGET_COLUMN)])
        .agg(exprs)
        .sort([TARGET_COLUMN], SortMultipleOptions::default())
        .collect()
        .with_context(|| format!("Failed to group by '{}'", TARGET_COLUMN))
}

fn codes_of(grouped: &DataFrame) -> Result<Vec<i64>> {
    let codes = grouped.column(TARGET_COLUMN)?.cast(&DataType::Int64)?;
    codes
        .i64()?
        .into_iter()
        .map(|c| c.context("Null class code in grouped result"))
        .collect()
}

fn float_values(grouped: &DataFrame, column: &str) -> Result<Vec<f64>> {
    let cast = grouped.column(column)?.cast(&DataType::Float64)?;
    Ok(cast
        .f64()?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}

/// Mean of every numeric column per class code, one entry per distinct code.
pub fn group_means(df: &DataFrame) -> Result<Vec<GroupMeans>> {
    let columns = value_columns(df);

    let mut exprs = vec![len().alias(COUNT_ALIAS)];
    exprs.extend(columns.iter().map(|c| col(c.as_str()).mean()));
    let grouped = aggregate_by_code(df, exprs)?;

    let codes = codes_of(&grouped)?;
    let counts = grouped.column(COUNT_ALIAS)?.cast(&DataType::UInt64)?;
    let counts: Vec<usize> = counts
        .u64()?
        .into_iter()
        .map(|n| n.unwrap_or(0) as usize)
        .collect();
    let means = columns
        .iter()
        .map(|c| float_values(&grouped, c))
        .collect::<Result<Vec<_>>>()?;

    Ok(codes
        .iter()
        .enumerate()
        .map(|(row, &code)| GroupMeans {
            code,
            species: species_name(code).map(str::to_string),
            count: counts[row],
            means: columns
                .iter()
                .zip(&means)
                .map(|(name, values)| (name.clone(), values[row]))
                .collect(),
        })
        .collect())
}

/// Minimum and maximum of `column` per class code
pub fn group_extents(df: &DataFrame, column: &str) -> Result<Vec<GroupExtent>> {
    let grouped = aggregate_by_code(
        df,
        vec![
            col(column).min().alias("__min"),
            col(column).max().alias("__max"),
        ],
    )?;

    let codes = codes_of(&grouped)?;
    let mins = float_values(&grouped, "__min")?;
    let maxs = float_values(&grouped, "__max")?;

    Ok(codes
        .into_iter()
        .zip(mins.into_iter().zip(maxs))
        .map(|(code, (min, max))| GroupExtent { code, min, max })
        .collect())
}

/// Append the species-name column derived from the class code.
///
/// Codes without a name produce a null entry.
pub fn add_species_column(df: &mut DataFrame) -> Result<()> {
    let codes = df
        .column(TARGET_COLUMN)
        .with_context(|| format!("Column '{}' not found", TARGET_COLUMN))?
        .cast(&DataType::Int64)?;
    let names: Vec<Option<&str>> = codes
        .i64()?
        .into_iter()
        .map(|code| code.and_then(species_name))
        .collect();

    df.with_column(Column::new(SPECIES_COLUMN.into(), names))
        .context("Failed to add species column")?;
    Ok(())
}

/// Species names of every row, in row order
pub fn species_labels(df: &DataFrame) -> Result<Vec<Option<String>>> {
    let species = df
        .column(SPECIES_COLUMN)
        .with_context(|| format!("Column '{}' not found", SPECIES_COLUMN))?;
    Ok(species
        .str()?
        .into_iter()
        .map(|s| s.map(str::to_string))
        .collect())
}
