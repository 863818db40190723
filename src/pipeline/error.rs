//! Error types for loading the Iris dataset.
//!
//! Loading distinguishes two categories: the dataset file is missing, or
//! anything else went wrong (I/O, CSV parsing, or a table that does not have
//! the Iris shape). Everything after loading reports through `anyhow`.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file does not exist.
    #[error("dataset file not found: {}", .path.display())]
    MissingFile {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The dataset file exists but could not be read.
    #[error("failed to read dataset file {}: {source}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The CSV content could not be parsed into a table.
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] PolarsError),

    /// The table was parsed but does not look like the Iris corpus.
    #[error("unexpected dataset layout: {0}")]
    Schema(String),
}

impl LoadError {
    /// True for the "missing file" category; every other variant is "other".
    pub fn is_missing_file(&self) -> bool {
        matches!(self, LoadError::MissingFile { .. })
    }

    /// Short category label used in console messages
    pub fn category(&self) -> &'static str {
        if self.is_missing_file() {
            "Dataset file not found"
        } else {
            "Unexpected error"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_category() {
        let err = LoadError::MissingFile {
            path: PathBuf::from("/nowhere/iris.csv"),
        };
        assert!(err.is_missing_file());
        assert_eq!(err.category(), "Dataset file not found");
        assert!(err.to_string().contains("/nowhere/iris.csv"));
    }

    #[test]
    fn test_other_category() {
        let err = LoadError::Schema("expected 150 rows, found 3".to_string());
        assert!(!err.is_missing_file());
        assert_eq!(err.category(), "Unexpected error");
        assert!(err.to_string().contains("150"));
    }
}
