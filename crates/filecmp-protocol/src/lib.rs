//! Wire format for filecmp.
//!
//! Defines the JSON envelopes returned by the compare endpoint, the endpoint
//! paths, and the multipart field names the endpoint expects.

pub mod endpoint;
pub mod message;

pub use endpoint::{endpoints, fields, HealthResponse};
pub use message::{messages, CompareResponse, ErrorResponse};
