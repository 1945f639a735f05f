//! # API Errors
//!
//! Error taxonomy for the endpoint handlers, mapped onto HTTP status codes
//! and rendered as the standard error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::response::ApiResponse;

/// Result type for endpoint handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Missing or malformed required input
    #[error("{0}")]
    Validation(&'static str),

    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(&'static str),

    /// HTTP method outside the endpoint contract
    #[error("Method not allowed")]
    MethodNotAllowed,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// A write statement failed to execute
    #[error("{message}")]
    Storage {
        message: &'static str,
        source: sqlx::Error,
    },

    /// The backing store could not be reached or queried
    #[error("Database connection failed")]
    Unavailable(#[from] sqlx::Error),
}

impl ApiError {
    /// Wrap a failed write with the operation's fixed error message
    pub fn storage(message: &'static str, source: sqlx::Error) -> Self {
        ApiError::Storage { message, source }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ApiResponse::error(self.to_string(), status.as_u16());
        (status, Json(body)).into_response()
    }
}
