//! Machine-readable summary of a full run

use anyhow::Result;
use polars::prelude::DataFrame;
use serde::Serialize;

use crate::charts::{iris_charts, Chart};
use crate::pipeline::{
    add_species_column, describe, drop_missing_rows, group_extents, group_means,
    missing_counts, schema, ColumnInfo, ColumnSummary, GroupMeans, PETAL_LENGTH,
};

use super::findings::{group_observation, key_findings, Evidence, Finding};

/// Everything the analysis computed, for `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub rows: usize,
    pub schema: Vec<ColumnInfo>,
    pub missing: Vec<(String, usize)>,
    pub rows_after_cleaning: usize,
    pub summary: Vec<ColumnSummary>,
    pub group_means: Vec<GroupMeans>,
    pub observation: Finding,
    pub key_findings: Vec<Finding>,
    pub charts: Vec<Chart>,
}

impl AnalysisReport {
    /// Run every analysis step on a freshly loaded table.
    ///
    /// Returns the report together with the cleaned table, which carries
    /// the derived species column.
    pub fn build(df: DataFrame, source: &str) -> Result<(Self, DataFrame)> {
        let rows = df.height();
        let schema = schema(&df);
        let missing = missing_counts(&df);

        let mut df = drop_missing_rows(&df)?;
        let summary = describe(&df)?;
        let groups = group_means(&df)?;
        add_species_column(&mut df)?;

        let extents = group_extents(&df, PETAL_LENGTH)?;
        let evidence = Evidence {
            groups: &groups,
            summaries: &summary,
            petal_length_extents: &extents,
        };
        let observation = group_observation(&evidence);
        let key_findings = key_findings(&evidence);
        let charts = iris_charts(&df)?;

        let report = Self {
            source: source.to_string(),
            rows,
            schema,
            missing,
            rows_after_cleaning: df.height(),
            summary,
            group_means: groups,
            observation,
            key_findings,
            charts,
        };
        Ok((report, df))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
