//! Dataset loader for the embedded Iris corpus or an Iris-format CSV file

use std::fmt;
use std::fs::File;
use std::io::{Cursor, ErrorKind};
use std::path::PathBuf;

use polars::prelude::*;

use super::dataset::{
    expected_columns, species_name, EXPECTED_ROWS, FEATURE_COLUMNS, IRIS_CSV, TARGET_COLUMN,
};
use super::error::LoadError;

/// Where the dataset is read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatasetSource {
    /// The copy compiled into the binary
    #[default]
    Embedded,
    /// An Iris-format CSV on disk
    File(PathBuf),
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Embedded => write!(f, "built-in Iris dataset"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load the Iris table and check that it has the expected shape.
///
/// Types are inferred from every row, then feature columns are normalised to
/// `Float64` and the class code to `Int64`. A value that cannot be converted
/// is a schema error rather than a silent null.
pub fn load_iris(source: &DatasetSource) -> Result<DataFrame, LoadError> {
    log::debug!("Loading dataset from {}", source);

    let mut df = match source {
        DatasetSource::Embedded => CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .into_reader_with_file_handle(Cursor::new(IRIS_CSV.as_bytes()))
            .finish()?,
        DatasetSource::File(path) => {
            let file = File::open(path).map_err(|e| match e.kind() {
                ErrorKind::NotFound => LoadError::MissingFile { path: path.clone() },
                _ => LoadError::Io {
                    path: path.clone(),
                    source: e,
                },
            })?;
            CsvReadOptions::default()
                .with_has_header(true)
                .with_infer_schema_length(None)
                .into_reader_with_file_handle(file)
                .finish()?
        }
    };

    check_columns(&df)?;
    normalise_types(&mut df)?;
    check_rows(&df)?;

    log::debug!("Loaded {} rows x {} columns", df.height(), df.width());
    Ok(df)
}

fn check_columns(df: &DataFrame) -> Result<(), LoadError> {
    let actual: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let expected = expected_columns();

    if actual.len() != expected.len() || actual.iter().zip(&expected).any(|(a, e)| a != e) {
        return Err(LoadError::Schema(format!(
            "expected columns {:?}, found {:?}",
            expected, actual
        )));
    }
    Ok(())
}

fn normalise_types(df: &mut DataFrame) -> Result<(), LoadError> {
    for name in FEATURE_COLUMNS {
        cast_checked(df, name, &DataType::Float64)?;
    }
    cast_checked(df, TARGET_COLUMN, &DataType::Int64)
}

/// Cast a column in place, failing if any value could not be converted
fn cast_checked(df: &mut DataFrame, name: &str, dtype: &DataType) -> Result<(), LoadError> {
    let column = df.column(name)?;
    let before = column.null_count();
    let cast = column.cast(dtype)?;

    let unconvertible = cast.null_count().saturating_sub(before);
    if unconvertible > 0 {
        return Err(LoadError::Schema(format!(
            "column '{}' has {} value(s) that are not {}",
            name, unconvertible, dtype
        )));
    }

    df.with_column(cast)?;
    Ok(())
}

fn check_rows(df: &DataFrame) -> Result<(), LoadError> {
    if df.height() != EXPECTED_ROWS {
        return Err(LoadError::Schema(format!(
            "expected {} rows, found {}",
            EXPECTED_ROWS,
            df.height()
        )));
    }

    let codes = df.column(TARGET_COLUMN)?.i64()?;
    if let Some(bad) = codes
        .into_iter()
        .flatten()
        .find(|&code| species_name(code).is_none())
    {
        return Err(LoadError::Schema(format!(
            "class code {} is outside {{0, 1, 2}}",
            bad
        )));
    }
    Ok(())
}
