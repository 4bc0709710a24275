//! Service-level error types and HTTP response conversion
//!
//! Request-path failures on the item collection use
//! [`ApiError`](crate::handlers::ApiError); this type covers bootstrap and
//! infrastructure failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::repository::RepositoryError;

/// Service error
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error (bind, serve)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store error outside a collection request (seeding, readiness)
    #[error("{0}")]
    Store(#[from] RepositoryError),
}

/// JSON error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Optional error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// HTTP status code
    pub status: u16,
}

impl ErrorResponse {
    /// Create error response with a code
    pub fn with_code(
        status: StatusCode,
        code: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
            status: status.as_u16(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Error::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                "Configuration error",
            ),
            Error::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                "I/O operation failed",
            ),
            Error::Store(e) => {
                tracing::error!(
                    operation = %e.operation,
                    kind = %e.kind,
                    "Store error: {}", e.message
                );
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORE_ERROR",
                    "Store operation failed",
                )
            }
        };

        if !matches!(self, Error::Store(_)) {
            tracing::error!("{}", self);
        }

        (status, Json(ErrorResponse::with_code(status, code, message))).into_response()
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;
    use crate::repository::RepositoryOperation;

    #[tokio::test]
    async fn test_store_error_response() {
        let err: Error =
            RepositoryError::validation_failed(RepositoryOperation::Insert, "bad id").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.code.as_deref(), Some("STORE_ERROR"));
        assert_eq!(body.status, 503);
    }

    #[test]
    fn test_io_error_display() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::AddrInUse, "taken").into();
        assert_eq!(err.to_string(), "I/O error: taken");
    }
}
