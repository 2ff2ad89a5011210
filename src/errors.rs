use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use crate::models::ErrorResponse;

/// Message returned for every lookup miss.
pub const NOT_FOUND_MESSAGE: &str = "not found";

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Lookup miss.
    ///
    /// With `strict` unset the response keeps HTTP 200 and only the body
    /// signals the miss, which is what existing front-ends expect.
    NotFound {
        /// What was looked up.
        resource: String,
        /// Respond with 404 instead of 200.
        strict: bool,
    },
    /// Internal server error.
    InternalError(String),
}

impl AppError {
    /// Status code this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { strict: true, .. } => StatusCode::NOT_FOUND,
            AppError::NotFound { strict: false, .. } => StatusCode::OK,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound { resource, .. } => write!(f, "Not found: {}", resource),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response with an `{"error": ...}` body.
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::NotFound { resource, .. } => {
                tracing::info!("Lookup miss: {}", resource);
                NOT_FOUND_MESSAGE.to_string()
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    /// Converts a `serde_json::Error` into an `AppError`.
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}
