//! Error types for the university server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable failure kinds, numbered after the canonical RPC status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    NotFound = 5,
    FailedPrecondition = 9,
    Internal = 13,
}

/// Main application error type
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    /// The referenced identifier does not exist in its collection
    #[error("Not found: {0}")]
    NotFound(String),

    /// The operation is valid in general but the current state forbids it
    #[error("Failed precondition: {0}")]
    FailedPrecondition(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::FailedPrecondition(_) => ErrorCode::FailedPrecondition,
            AppError::Internal(_) => ErrorCode::Internal,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    /// Failure kind (`NotFound`, `FailedPrecondition`, `Internal`)
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::FailedPrecondition(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
