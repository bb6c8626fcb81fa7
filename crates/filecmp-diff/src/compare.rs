//! Positional line comparison.
//!
//! Lines are aligned strictly by index. A single line inserted at the top of
//! one document shifts every later line, and every shifted position is
//! reported as a difference.

use crate::document::TextDocument;
use crate::report::{ComparisonReport, LineDifference};

/// Split text on `'\n'` exactly as a literal split does.
///
/// Empty text is one empty line and a trailing newline produces a trailing
/// empty line. A `'\r'` before the newline stays part of the line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Compare two documents line by line.
pub fn compare(first: &TextDocument, second: &TextDocument) -> ComparisonReport {
    compare_texts(&first.name, &first.content, &second.name, &second.content)
}

/// Compare two named texts line by line.
///
/// Never fails: any pair of strings, including empty ones or ones of very
/// different lengths, yields a report.
pub fn compare_texts(
    first_name: &str,
    first_text: &str,
    second_name: &str,
    second_text: &str,
) -> ComparisonReport {
    let first_lines = split_lines(first_text);
    let second_lines = split_lines(second_text);
    let max_lines = first_lines.len().max(second_lines.len());

    let differences = (0..max_lines)
        .filter_map(|i| {
            let line1 = first_lines.get(i).copied();
            let line2 = second_lines.get(i).copied();
            (line1 != line2).then(|| LineDifference {
                line_number: i + 1,
                file1: line1.map(str::to_owned),
                file2: line2.map(str::to_owned),
            })
        })
        .collect();

    ComparisonReport {
        file1_name: first_name.to_owned(),
        file2_name: second_name.to_owned(),
        file1_lines: first_lines.len(),
        file2_lines: second_lines.len(),
        differences,
    }
}
