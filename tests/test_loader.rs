//! Unit tests for dataset loading

use iris_eda::pipeline::{
    expected_columns, load_iris, DatasetSource, LoadError, EXPECTED_ROWS, SEPAL_LENGTH,
    TARGET_COLUMN,
};
use std::path::PathBuf;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_embedded_dataset_shape() {
    let df = iris();
    assert_shape(&df, 150, 5);
    assert_eq!(
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>(),
        expected_columns()
    );
}

#[test]
fn test_embedded_dataset_has_no_nulls() {
    let df = iris();
    for column in df.get_columns() {
        assert_eq!(column.null_count(), 0, "column '{}' has nulls", column.name());
    }
}

#[test]
fn test_class_codes_are_zero_one_two() {
    let df = iris();
    let codes: Vec<i64> = df
        .column(TARGET_COLUMN)
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(codes.len(), EXPECTED_ROWS);
    assert!(codes.iter().all(|c| (0..=2).contains(c)));
    for code in 0..=2 {
        assert_eq!(codes.iter().filter(|&&c| c == code).count(), 50);
    }
}

#[test]
fn test_load_from_file_matches_embedded() {
    let (_temp_dir, csv_path) = create_iris_csv();
    let from_file = load_iris(&DatasetSource::File(csv_path)).unwrap();
    assert!(from_file.equals(&iris()));
}

#[test]
fn test_missing_file_is_reported_as_missing() {
    let source = DatasetSource::File(PathBuf::from("/definitely/not/here/iris.csv"));
    let err = load_iris(&source).unwrap_err();
    assert!(err.is_missing_file(), "expected MissingFile, got {:?}", err);
}

#[test]
fn test_truncated_file_is_schema_error() {
    let (_temp_dir, csv_path) = create_temp_csv(&truncated_iris_csv(10));
    let err = load_iris(&DatasetSource::File(csv_path)).unwrap_err();
    assert!(matches!(err, LoadError::Schema(_)), "got {:?}", err);
    assert!(!err.is_missing_file());
}

#[test]
fn test_unknown_class_code_is_rejected() {
    let (_temp_dir, csv_path) = create_temp_csv(&iris_csv_with_last_code("5"));
    let err = load_iris(&DatasetSource::File(csv_path)).unwrap_err();
    assert!(matches!(err, LoadError::Schema(_)), "got {:?}", err);
    assert!(err.to_string().contains('5'));
}

#[test]
fn test_non_numeric_measurement_is_rejected() {
    let (_temp_dir, csv_path) = create_temp_csv(&iris_csv_with_first_value("abc"));
    let err = load_iris(&DatasetSource::File(csv_path)).unwrap_err();
    assert!(matches!(err, LoadError::Schema(_)), "got {:?}", err);
    assert!(!err.is_missing_file());
    assert!(err.to_string().contains(SEPAL_LENGTH));
}

#[test]
fn test_non_numeric_class_code_is_rejected() {
    let (_temp_dir, csv_path) = create_temp_csv(&iris_csv_with_last_code("virginica"));
    let err = load_iris(&DatasetSource::File(csv_path)).unwrap_err();
    assert!(matches!(err, LoadError::Schema(_)), "got {:?}", err);
    assert!(err.to_string().contains(TARGET_COLUMN));
}

#[test]
fn test_wrong_header_is_rejected() {
    let (_temp_dir, csv_path) = create_temp_csv("a,b,c\n1,2,3\n");
    let err = load_iris(&DatasetSource::File(csv_path)).unwrap_err();
    assert!(matches!(err, LoadError::Schema(_)), "got {:?}", err);
}
