//! Error types for the proxy and the origin service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Service Error Enum ==
/// Errors surfaced to HTTP callers.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Order parameter missing, not an integer, or out of range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Origin unreachable, timed out, or answered with something unusable
    #[error("Origin unavailable: {0}")]
    OriginUnavailable(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServiceError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ServiceError::OriginUnavailable(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// A query string axum could not deserialize, such as a repeated `order`.
impl From<QueryRejection> for ServiceError {
    fn from(rejection: QueryRejection) -> Self {
        ServiceError::InvalidInput(rejection.body_text())
    }
}

// == Origin Error Enum ==
/// Failure to obtain a value from the origin service.
#[derive(Error, Debug)]
pub enum OriginError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("origin responded with status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Payload(String),

    #[error("failed to build client: {0}")]
    Client(String),
}

impl From<OriginError> for ServiceError {
    fn from(err: OriginError) -> Self {
        ServiceError::OriginUnavailable(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for request handling.
pub type Result<T> = std::result::Result<T, ServiceError>;
