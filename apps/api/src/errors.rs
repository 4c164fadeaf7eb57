use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only hard stops live here. Similarity and schema-parse failures degrade to
/// values and never reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("No readable text in {0}")]
    EmptyContent(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Model invocation failed: {0}")]
    ModelInvocation(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedFormat(detail) => AppError::UnsupportedFormat(detail),
            ExtractionError::ExtractionFailed(detail) => AppError::ExtractionFailed(detail),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::UnsupportedFormat(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                format!("Only PDF and plain-text files are supported ({msg})"),
            ),
            AppError::ExtractionFailed(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_FAILED",
                format!("Could not read the uploaded file: {msg}"),
            ),
            AppError::EmptyContent(source) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_CONTENT",
                format!("No readable text found in {source}. Scanned or image-only PDFs are not supported."),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ModelInvocation(e) => {
                tracing::error!("Model invocation error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_INVOCATION_ERROR",
                    format!("The feedback model could not be reached: {e}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
