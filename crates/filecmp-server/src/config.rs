use std::net::SocketAddr;
use std::path::Path;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Upper bound on a whole upload request body, in bytes.
    pub max_upload_size: usize,
    /// Origins allowed to call the API cross-origin. Empty mirrors the
    /// requesting origin back.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_upload_size: 200 * 1024 * 1024,
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys take their default.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> ServerResult<()> {
        if self.max_upload_size == 0 {
            return Err(ServerError::Config("max_upload_size must be greater than zero".into()));
        }
        self.origin_header_values().map(|_| ())
    }

    pub(crate) fn origin_header_values(&self) -> ServerResult<Vec<HeaderValue>> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                if origin.trim() == "*" {
                    return Err(ServerError::Config(
                        "wildcard origin \"*\" cannot be combined with credentials; \
                         leave allowed_origins empty to accept any origin"
                            .into(),
                    ));
                }
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| ServerError::Config(format!("invalid origin: {origin:?}")))
            })
            .collect()
    }
}
