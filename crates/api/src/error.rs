use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use lexica_core::error::CoreError;
use lexica_dictionary::DictionaryApiError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`DictionaryApiError`] for
/// upstream failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lexica_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the external dictionary client.
    #[error(transparent)]
    Dictionary(#[from] DictionaryApiError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::InvalidInput(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone())
                }
                CoreError::NotFound { word } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("No dictionary entry for '{word}'"),
                ),
                CoreError::Upstream(msg) => {
                    tracing::error!(error = %msg, "Upstream dictionary error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "UPSTREAM_ERROR",
                        "Failed to fetch word definition".to_string(),
                    )
                }
                CoreError::Storage(msg) => {
                    tracing::error!(error = %msg, "Storage error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "STORAGE_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Dictionary client errors ---
            AppError::Dictionary(err) => classify_dictionary_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a dictionary client error into an HTTP status, error code, and message.
///
/// - An empty word maps to 400.
/// - A word with no entry maps to 404, distinct from generic failures so the
///   client can render a "no results" state.
/// - Transport failures and unexpected upstream statuses map to 500 with a
///   sanitized message; details go to the log only.
fn classify_dictionary_error(err: &DictionaryApiError) -> (StatusCode, &'static str, String) {
    match err {
        DictionaryApiError::InvalidWord(msg) => {
            (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone())
        }
        DictionaryApiError::NotFound(word) => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("No dictionary entry found for '{word}'"),
        ),
        DictionaryApiError::Request(req_err) => {
            tracing::error!(error = %req_err, "Dictionary request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                "Failed to fetch word definition".to_string(),
            )
        }
        DictionaryApiError::ApiError { status, body } => {
            tracing::error!(status, body = %body, "Dictionary API returned an error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                "Failed to fetch word definition".to_string(),
            )
        }
    }
}
