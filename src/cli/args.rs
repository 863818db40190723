//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::DatasetSource;

/// iris-eda - Explore the Iris dataset: statistics, per-species means and charts
#[derive(Parser, Debug)]
#[command(name = "iris-eda")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read the Iris CSV from this file instead of the built-in copy.
    /// The file must have the scikit-learn header:
    /// sepal length (cm), sepal width (cm), petal length (cm), petal width (cm), target
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Do not open the chart window; print a one-line summary of each chart instead
    #[arg(long, default_value = "false")]
    pub no_display: bool,

    /// Print the full analysis as JSON instead of console tables
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Number of rows shown in the dataset preview
    #[arg(long, default_value = "5", value_parser = validate_head_rows)]
    pub head_rows: usize,
}

impl Cli {
    /// Dataset source selected by `--data`
    pub fn source(&self) -> DatasetSource {
        match &self.data {
            Some(path) => DatasetSource::File(path.clone()),
            None => DatasetSource::Embedded,
        }
    }
}

/// Validator for head_rows parameter
fn validate_head_rows(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid row count", s))?;

    if value == 0 {
        Err("head_rows must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
