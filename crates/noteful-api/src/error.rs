//! Error-to-response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// API-level error with an HTTP status mapping.
#[derive(Debug)]
pub enum ApiError {
    /// Unexpected storage failure, reported generically as 500.
    Storage(noteful_core::Error),
    NotFound(String),
    BadRequest(String),
}

impl From<noteful_core::Error> for ApiError {
    fn from(err: noteful_core::Error) -> Self {
        use noteful_core::Error;
        match err {
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::Validation(msg) => ApiError::BadRequest(msg),
            // Uniqueness conflicts surface as 400 on this API; existing
            // clients depend on that status.
            Error::Conflict(msg) => ApiError::BadRequest(msg),
            other => ApiError::Storage(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Storage(err) => {
                tracing::error!(
                    subsystem = "api",
                    error = %err,
                    "Request failed with storage error"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
