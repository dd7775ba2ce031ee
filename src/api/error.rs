use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API clients as non-200 responses.
///
/// Lookup misses and date-format problems are not listed here: the contract
/// reports those inside a 200 body, so the handlers return them as regular
/// replies.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A query parameter failed range validation.
    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": detail })),
            )
                .into_response(),
        }
    }
}
