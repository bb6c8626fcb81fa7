use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use filecmp_protocol::{messages, ErrorResponse};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("missing uploaded file(s): {0}")]
    MissingInput(String),

    #[error("upload error: {0}")]
    Upload(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingInput(_) => StatusCode::BAD_REQUEST,
            Self::Upload(_) | Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The JSON body sent to the client for this error.
    pub fn envelope(&self) -> ErrorResponse {
        match self {
            Self::MethodNotAllowed => ErrorResponse::new(messages::METHOD_NOT_ALLOWED),
            Self::MissingInput(_) => ErrorResponse::new(messages::MISSING_FILES),
            Self::Upload(msg) | Self::Config(msg) | Self::Internal(msg) => {
                ErrorResponse::with_details(messages::COMPARE_FAILED, msg.clone())
            }
            Self::Io(e) => ErrorResponse::with_details(messages::COMPARE_FAILED, e.to_string()),
        }
    }
}

impl From<MultipartRejection> for ServerError {
    fn from(e: MultipartRejection) -> Self {
        Self::Upload(e.body_text())
    }
}

impl From<MultipartError> for ServerError {
    fn from(e: MultipartError) -> Self {
        Self::Upload(e.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "error comparing files");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }
        (status, Json(self.envelope())).into_response()
    }
}
