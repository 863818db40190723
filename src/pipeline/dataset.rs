//! The Iris corpus: embedded CSV, column names and the class-code lookup

/// Iris measurements as shipped with scikit-learn (150 rows, header included)
pub const IRIS_CSV: &str = include_str!("../../data/iris.csv");

pub const SEPAL_LENGTH: &str = "sepal length (cm)";
pub const SEPAL_WIDTH: &str = "sepal width (cm)";
pub const PETAL_LENGTH: &str = "petal length (cm)";
pub const PETAL_WIDTH: &str = "petal width (cm)";

/// Integer class code column (0, 1 or 2)
pub const TARGET_COLUMN: &str = "target";

/// Derived species-name column
pub const SPECIES_COLUMN: &str = "species";

/// The four continuous measurements, in file order
pub const FEATURE_COLUMNS: [&str; 4] = [SEPAL_LENGTH, SEPAL_WIDTH, PETAL_LENGTH, PETAL_WIDTH];

/// Number of samples in the corpus
pub const EXPECTED_ROWS: usize = 150;

/// Class code to species name, ordered by code
pub const SPECIES: [(i64, &str); 3] = [(0, "setosa"), (1, "versicolor"), (2, "virginica")];

/// Look up the species name for a class code.
///
/// Returns `None` for any code outside {0, 1, 2}.
pub fn species_name(code: i64) -> Option<&'static str> {
    SPECIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Names of the columns the loader must find, in file order
pub fn expected_columns() -> Vec<&'static str> {
    let mut columns = FEATURE_COLUMNS.to_vec();
    columns.push(TARGET_COLUMN);
    columns
}
