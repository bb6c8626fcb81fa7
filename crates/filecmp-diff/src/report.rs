//! Comparison output types.
//!
//! Both types serialize with the camelCase keys clients of the compare
//! endpoint read (`file1Name`, `lineNumber`, ...). An absent line is `null`.

use serde::{Deserialize, Serialize};

/// A line position at which the two documents disagree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDifference {
    /// 1-based line position.
    pub line_number: usize,
    /// The line in the first document, or `None` if it has fewer lines.
    pub file1: Option<String>,
    /// The line in the second document, or `None` if it has fewer lines.
    pub file2: Option<String>,
}

/// The complete result of comparing two documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub file1_name: String,
    pub file2_name: String,
    pub file1_lines: usize,
    pub file2_lines: usize,
    /// Differences in strictly ascending `line_number` order.
    pub differences: Vec<LineDifference>,
}

impl ComparisonReport {
    /// Returns `true` if no line position differs.
    pub fn is_identical(&self) -> bool {
        self.differences.is_empty()
    }

    pub fn difference_count(&self) -> usize {
        self.differences.len()
    }

    /// Line numbers of every differing position, in ascending order.
    pub fn differing_lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.differences.iter().map(|d| d.line_number)
    }
}
