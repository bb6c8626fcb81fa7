use serde::{Deserialize, Serialize};

use filecmp_diff::ComparisonReport;

/// Human-readable messages carried in error envelopes.
pub mod messages {
    pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
    pub const MISSING_FILES: &str = "Please upload both files";
    pub const COMPARE_FAILED: &str = "Failed to compare files";
}

/// Success envelope: `{"success": true, "comparison": {...}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareResponse {
    pub success: bool,
    pub comparison: ComparisonReport,
}

impl CompareResponse {
    pub fn new(comparison: ComparisonReport) -> Self {
        Self { success: true, comparison }
    }
}

/// Error envelope: `{"error": "...", "details": "..."}`.
///
/// `details` is only present on server-side failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), details: None }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self { error: error.into(), details: Some(details.into()) }
    }
}
