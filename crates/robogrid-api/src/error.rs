//! API error types and handling

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use robogrid_core::ProgramError;
use serde_json::json;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be interpreted
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Unknown resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// Code-mode program rejected before running
    #[error("Program error: {0}")]
    Program(#[from] ProgramError),

    /// Page template failed to render
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Anything else
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Program(_) => (StatusCode::BAD_REQUEST, "program_error"),
            ApiError::Template(_) => (StatusCode::INTERNAL_SERVER_ERROR, "template_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
