/// HTTP endpoint paths.
pub mod endpoints {
    pub const COMPARE: &str = "/api/compare";
    pub const HEALTH: &str = "/api/health";
    pub const INFO: &str = "/api/info";
}

/// Multipart field names of the two uploaded files.
pub mod fields {
    pub const FILE1: &str = "file1";
    pub const FILE2: &str = "file2";
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
