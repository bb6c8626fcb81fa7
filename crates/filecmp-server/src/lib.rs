//! HTTP server for filecmp.
//!
//! Accepts two uploaded text files as a multipart form on a single endpoint
//! and answers with a positional line-by-line comparison as JSON.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::FilecmpServer;
pub use upload::{UploadForm, UploadedPair};
