//! Error handling for the REST API server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::auth::SessionError;
use pactum_core::PactumError;
use pactum_extractors::ExtractError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<PactumError> for ApiError {
    fn from(err: PactumError) -> Self {
        match err {
            PactumError::Configuration(msg) => ApiError::bad_request(msg),
            PactumError::Authentication { message } => ApiError::unauthorized(message),
            PactumError::NotFound { message } => ApiError::not_found(message),
            PactumError::Validation { message } => ApiError::validation(message),
            PactumError::Llm { message, .. } => {
                ApiError::internal(format!("LLM error: {}", message))
            }
            PactumError::Parse { message } => {
                ApiError::internal(format!("Parse error: {}", message))
            }
            PactumError::Database { message } => {
                ApiError::internal(format!("Database error: {}", message))
            }
            PactumError::Serialization(e) => {
                ApiError::internal(format!("Serialization error: {}", e))
            }
            PactumError::Io(e) => ApiError::internal(format!("IO error: {}", e)),
            PactumError::Internal(msg) => ApiError::internal(msg),
        }
    }
}

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedKind(_) | ExtractError::Unreadable(_) => {
                ApiError::bad_request(err.to_string())
            }
            ExtractError::Io(e) => ApiError::internal(format!("IO error: {}", e)),
            ExtractError::TaskJoin(e) => ApiError::internal(format!("Task error: {}", e)),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        ApiError::unauthorized(err.to_string())
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
