//! Store error types
//!
//! Structured errors for store operations, carrying the operation that failed
//! and the entity involved.
//!
//! # Example
//!
//! ```rust
//! use todo_service::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
//!
//! let error = RepositoryError::not_found(RepositoryOperation::Get, "TodoItem", 7);
//! assert!(matches!(error.kind, RepositoryErrorKind::NotFound));
//! assert_eq!(error.entity_id.as_deref(), Some("7"));
//! ```

use std::fmt;

/// Store operation being performed when the error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Listing every item
    List,
    /// Looking up one item by id
    Get,
    /// Counting live items
    Count,
    /// Adding an item under a fresh id
    Add,
    /// Inserting an item under its own id
    Insert,
    /// Overwriting an existing item
    Update,
    /// Removing an item
    Remove,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Get => write!(f, "get"),
            Self::Count => write!(f, "count"),
            Self::Add => write!(f, "add"),
            Self::Insert => write!(f, "insert"),
            Self::Update => write!(f, "update"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// Category of store error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// No item with the requested id
    NotFound,
    /// An item with the requested id already exists
    AlreadyExists,
    /// The item was rejected before touching the collection
    ValidationFailed,
    /// No identifiers are left to assign
    Exhausted,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::AlreadyExists => write!(f, "already_exists"),
            Self::ValidationFailed => write!(f, "validation_failed"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// Structured store error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The type of entity involved
    pub entity_type: Option<String>,
    /// The id of the entity involved
    pub entity_id: Option<String>,
}

impl RepositoryError {
    /// Create a new store error without entity context
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_type: None,
            entity_id: None,
        }
    }

    /// Create a "not found" error for the given operation and entity
    pub fn not_found(
        operation: RepositoryOperation,
        entity_type: impl Into<String>,
        entity_id: impl ToString,
    ) -> Self {
        Self::new(operation, RepositoryErrorKind::NotFound, "Entity not found")
            .with_entity(entity_type, entity_id)
    }

    /// Create an "already exists" error for an insert with a taken id
    pub fn already_exists(entity_type: impl Into<String>, entity_id: impl ToString) -> Self {
        Self::new(
            RepositoryOperation::Insert,
            RepositoryErrorKind::AlreadyExists,
            "Entity already exists",
        )
        .with_entity(entity_type, entity_id)
    }

    /// Create a validation failed error
    pub fn validation_failed(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::ValidationFailed, message)
    }

    /// Create an error for a store that has run out of ids
    pub fn exhausted(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::Exhausted, message)
    }

    /// Attach entity context to an existing error
    #[must_use]
    pub fn with_entity(mut self, entity_type: impl Into<String>, entity_id: impl ToString) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id.to_string());
        self
    }

    /// Whether this error means the requested item does not exist
    pub fn is_not_found(&self) -> bool {
        self.kind == RepositoryErrorKind::NotFound
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let (Some(entity_type), Some(entity_id)) = (&self.entity_type, &self.entity_id) {
            write!(f, " [{}: {}]", entity_type, entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(RepositoryOperation::List.to_string(), "list");
        assert_eq!(RepositoryOperation::Insert.to_string(), "insert");
        assert_eq!(RepositoryOperation::Remove.to_string(), "remove");
    }

    #[test]
    fn test_not_found_carries_entity() {
        let error = RepositoryError::not_found(RepositoryOperation::Update, "TodoItem", 3);
        assert_eq!(error.operation, RepositoryOperation::Update);
        assert!(error.is_not_found());
        assert_eq!(error.entity_type.as_deref(), Some("TodoItem"));
        assert_eq!(error.entity_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_already_exists_is_not_not_found() {
        let error = RepositoryError::already_exists("TodoItem", 1);
        assert_eq!(error.kind, RepositoryErrorKind::AlreadyExists);
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_display_with_and_without_entity() {
        let plain = RepositoryError::validation_failed(RepositoryOperation::Insert, "id must be positive");
        assert_eq!(
            plain.to_string(),
            "Repository validation_failed error during insert: id must be positive"
        );

        let scoped = RepositoryError::not_found(RepositoryOperation::Remove, "TodoItem", 9);
        assert!(scoped.to_string().ends_with("[TodoItem: 9]"));
    }
}
