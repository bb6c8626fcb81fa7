//! Line comparison engine for filecmp.
//!
//! Compares two text documents line by line, strictly by position. Line `i`
//! of the first document is only ever compared with line `i` of the second;
//! there is no realignment after an inserted or deleted line.
//!
//! # Key Types
//!
//! - [`TextDocument`] -- A named text body supplied for comparison
//! - [`LineDifference`] -- One line position where the documents disagree
//! - [`ComparisonReport`] -- Line counts plus all differences, in line order

pub mod compare;
pub mod document;
pub mod report;

pub use compare::{compare, compare_texts, split_lines};
pub use document::TextDocument;
pub use report::{ComparisonReport, LineDifference};
