//! API error types for handler operations
//!
//! Handler failures map onto an HTTP status via `IntoResponse`. The response
//! carries the status only; the details go to the log.
//!
//! # Example
//!
//! ```rust
//! use todo_service::handlers::{ApiError, ApiErrorKind, ApiOperation};
//!
//! let error = ApiError::not_found(ApiOperation::Get, "TodoItem", 7);
//! assert!(matches!(error.kind, ApiErrorKind::NotFound));
//! assert_eq!(error.entity_id, Some("7".to_string()));
//! ```

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};

/// Handler operation being performed when the error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    /// Listing the collection
    List,
    /// Getting one entity by id
    Get,
    /// Creating a new entity
    Create,
    /// Replacing an existing entity
    Replace,
    /// Deleting an entity
    Delete,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Get => write!(f, "get"),
            Self::Create => write!(f, "create"),
            Self::Replace => write!(f, "replace"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Category of API error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// No entity with the requested id
    NotFound,
    /// The request contradicts itself (e.g. body id differs from path id)
    BadRequest,
    /// The request conflicts with stored state
    Conflict,
    /// The entity was rejected by store validation
    ValidationFailed,
    /// The store cannot accept more entities
    Unavailable,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::BadRequest => write!(f, "bad_request"),
            Self::Conflict => write!(f, "conflict"),
            Self::ValidationFailed => write!(f, "validation_failed"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

impl ApiErrorKind {
    /// Get the HTTP status code for this error kind
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Structured API error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The operation being performed when the error occurred
    pub operation: ApiOperation,
    /// The category of error
    pub kind: ApiErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The type of entity involved
    pub entity_type: Option<String>,
    /// The id of the entity involved
    pub entity_id: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(operation: ApiOperation, kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_type: None,
            entity_id: None,
        }
    }

    /// Create a "not found" error with entity context
    pub fn not_found(
        operation: ApiOperation,
        entity_type: impl Into<String>,
        entity_id: impl ToString,
    ) -> Self {
        Self::new(operation, ApiErrorKind::NotFound, "Entity not found")
            .with_entity(entity_type, entity_id)
    }

    /// Create a bad request error
    pub fn bad_request(operation: ApiOperation, message: impl Into<String>) -> Self {
        Self::new(operation, ApiErrorKind::BadRequest, message)
    }

    /// Add entity context to an existing error
    #[must_use]
    pub fn with_entity(mut self, entity_type: impl Into<String>, entity_id: impl ToString) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id.to_string());
        self
    }

    /// HTTP status for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let (Some(entity_type), Some(entity_id)) = (&self.entity_type, &self.entity_id) {
            write!(f, " [{}: {}]", entity_type, entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(
            operation = %self.operation,
            kind = %self.kind,
            entity_type = ?self.entity_type,
            entity_id = ?self.entity_id,
            "API error: {}", self.message
        );

        self.kind.status_code().into_response()
    }
}

fn repository_operation_to_api_operation(op: RepositoryOperation) -> ApiOperation {
    match op {
        RepositoryOperation::List | RepositoryOperation::Count => ApiOperation::List,
        RepositoryOperation::Get => ApiOperation::Get,
        RepositoryOperation::Add | RepositoryOperation::Insert => ApiOperation::Create,
        RepositoryOperation::Update => ApiOperation::Replace,
        RepositoryOperation::Remove => ApiOperation::Delete,
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        let kind = match err.kind {
            RepositoryErrorKind::NotFound => ApiErrorKind::NotFound,
            RepositoryErrorKind::AlreadyExists => ApiErrorKind::Conflict,
            RepositoryErrorKind::ValidationFailed => ApiErrorKind::ValidationFailed,
            RepositoryErrorKind::Exhausted => ApiErrorKind::Unavailable,
        };

        Self {
            operation: repository_operation_to_api_operation(err.operation),
            kind,
            message: err.message,
            entity_type: err.entity_type,
            entity_id: err.entity_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiErrorKind::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiErrorKind::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiErrorKind::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiErrorKind::ValidationFailed.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_from_repository_not_found() {
        let err = RepositoryError::not_found(RepositoryOperation::Update, "TodoItem", 3);
        let api: ApiError = err.into();
        assert_eq!(api.kind, ApiErrorKind::NotFound);
        assert_eq!(api.operation, ApiOperation::Replace);
        assert_eq!(api.entity_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_from_repository_already_exists_is_conflict() {
        let api: ApiError = RepositoryError::already_exists("TodoItem", 1).into();
        assert_eq!(api.kind, ApiErrorKind::Conflict);
        assert_eq!(api.operation, ApiOperation::Create);
    }

    #[test]
    fn test_from_repository_exhausted_is_unavailable() {
        let err = RepositoryError::exhausted(RepositoryOperation::Add, "no ids left");
        let api: ApiError = err.into();
        assert_eq!(api.kind, ApiErrorKind::Unavailable);
        assert_eq!(api.operation, ApiOperation::Create);
        assert_eq!(api.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_display() {
        let error = ApiError::bad_request(ApiOperation::Replace, "id mismatch")
            .with_entity("TodoItem", 1);
        assert_eq!(
            error.to_string(),
            "API bad_request error during replace: id mismatch [TodoItem: 1]"
        );
    }

    #[tokio::test]
    async fn test_response_has_status_and_empty_body() {
        let response = ApiError::not_found(ApiOperation::Delete, "TodoItem", 5).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }
}
