//! Fixed observations about the Iris data, each checked against the
//! computed aggregates

use serde::Serialize;

use crate::pipeline::{
    ColumnSummary, GroupExtent, GroupMeans, PETAL_LENGTH, PETAL_WIDTH, SEPAL_WIDTH,
};

/// Aggregates the observations are checked against
#[derive(Debug, Clone, Copy)]
pub struct Evidence<'a> {
    pub groups: &'a [GroupMeans],
    pub summaries: &'a [ColumnSummary],
    pub petal_length_extents: &'a [GroupExtent],
}

impl Evidence<'_> {
    fn mean(&self, code: i64, column: &str) -> Option<f64> {
        self.groups
            .iter()
            .find(|g| g.code == code)
            .and_then(|g| g.mean(column))
    }

    fn summary(&self, column: &str) -> Option<&ColumnSummary> {
        self.summaries.iter().find(|s| s.column == column)
    }

    /// Mean of `column` for `code` compared with every other group
    fn compare_to_others(&self, code: i64, column: &str, cmp: fn(f64, f64) -> bool) -> bool {
        let Some(own) = self.mean(code, column) else {
            return false;
        };
        let others: Vec<f64> = self
            .groups
            .iter()
            .filter(|g| g.code != code)
            .filter_map(|g| g.mean(column))
            .collect();
        !others.is_empty() && others.iter().all(|&other| cmp(own, other))
    }
}

/// One printed observation and whether the data supports it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub text: &'static str,
    pub supported: bool,
}

type Check = fn(&Evidence) -> bool;

/// Printed right after the per-species means
pub const GROUP_OBSERVATION: &str =
    "Virginica generally has the largest petal length and width compared to other species.";

const KEY_FINDINGS: [(&str, Check); 4] = [
    (
        "Setosa has distinctly smaller petal length and width compared to other species.",
        setosa_has_smallest_petals,
    ),
    (
        "Versicolor and Virginica overlap in sepal size, but Virginica tends to have larger petals overall.",
        virginica_petals_exceed_versicolor,
    ),
    (
        "The histogram shows sepal width distribution is roughly normal, centered around ~3 cm.",
        sepal_width_centered_near_three,
    ),
    (
        "Scatter plot confirms species can be separated visually by petal length and sepal length.",
        setosa_petal_length_separates,
    ),
];

fn setosa_has_smallest_petals(e: &Evidence) -> bool {
    [PETAL_LENGTH, PETAL_WIDTH]
        .iter()
        .all(|c| e.compare_to_others(0, c, |own, other| own < other))
}

fn virginica_has_largest_petals(e: &Evidence) -> bool {
    [PETAL_LENGTH, PETAL_WIDTH]
        .iter()
        .all(|c| e.compare_to_others(2, c, |own, other| own > other))
}

fn virginica_petals_exceed_versicolor(e: &Evidence) -> bool {
    [PETAL_LENGTH, PETAL_WIDTH]
        .iter()
        .all(|c| matches!((e.mean(2, c), e.mean(1, c)), (Some(v), Some(w)) if v > w))
}

/// Mean within 0.25 cm of 3 and median close to the mean (no strong skew)
fn sepal_width_centered_near_three(e: &Evidence) -> bool {
    e.summary(SEPAL_WIDTH).is_some_and(|s| {
        (s.mean - 3.0).abs() <= 0.25 && (s.median - s.mean).abs() <= 0.25 * s.std
    })
}

/// Setosa petal lengths never reach those of the other two species
fn setosa_petal_length_separates(e: &Evidence) -> bool {
    let Some(setosa) = e.petal_length_extents.iter().find(|x| x.code == 0) else {
        return false;
    };
    let others: Vec<&GroupExtent> = e
        .petal_length_extents
        .iter()
        .filter(|x| x.code != 0)
        .collect();
    !others.is_empty() && others.iter().all(|x| setosa.max < x.min)
}

/// The observation printed after the group means
pub fn group_observation(evidence: &Evidence) -> Finding {
    Finding {
        text: GROUP_OBSERVATION,
        supported: virginica_has_largest_petals(evidence),
    }
}

/// The closing "Key Findings", in print order
pub fn key_findings(evidence: &Evidence) -> Vec<Finding> {
    KEY_FINDINGS
        .iter()
        .map(|(text, check)| Finding {
            text: *text,
            supported: check(evidence),
        })
        .collect()
}
