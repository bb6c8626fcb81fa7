use axum::extract::multipart::MultipartRejection;
use axum::extract::Multipart;
use axum::response::Json;
use serde_json::json;

use filecmp_protocol::{CompareResponse, HealthResponse};

use crate::error::{ServerError, ServerResult};
use crate::upload::UploadForm;

/// Compare the two uploaded files.
pub async fn compare_handler(
    multipart: Result<Multipart, MultipartRejection>,
) -> ServerResult<Json<CompareResponse>> {
    let pair = UploadForm::read(multipart?).await?.into_pair()?;
    let report = pair.compare();
    tracing::info!(
        file1 = %report.file1_name,
        file2 = %report.file2_name,
        file1_lines = report.file1_lines,
        file2_lines = report.file2_lines,
        differences = report.difference_count(),
        "compared files"
    );
    Ok(Json(CompareResponse::new(report)))
}

/// Any verb on the compare endpoint other than `POST`. `OPTIONS` never gets
/// here; the CORS layer answers it.
pub async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "filecmp-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
