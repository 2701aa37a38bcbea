use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Report error: {0}")]
    Reporter(#[from] reporter::error::ReporterError),
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] core_types::CoreError),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Reporter(report_err) => {
                tracing::error!(error = ?report_err, "Report error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::InvalidRequest(core_err) => {
                tracing::debug!(error = %core_err, "Rejected report request.");
                (StatusCode::BAD_REQUEST, core_err.to_string())
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
