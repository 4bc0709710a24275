//! Success responses for handler operations
//!
//! - **201 Created** with an optional `Location` header ([`Created`])
//! - **204 No Content** ([`NoContent`])
//!
//! Plain `200 OK` bodies are returned as `Json<T>` directly.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// HTTP 201 Created response
///
/// Carries the created entity and, optionally, the path at which it can be
/// fetched again.
///
/// # Example
///
/// ```rust
/// use todo_service::handlers::Created;
/// use todo_service::model::TodoItem;
///
/// let created = Created::new(TodoItem::new(3, "Task 3", false)).with_location("/items/3");
/// assert_eq!(created.location(), Some("/items/3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created<T> {
    data: T,
    location: Option<String>,
}

impl<T> Created<T> {
    /// Create a new 201 Created response
    pub fn new(data: T) -> Self {
        Self {
            data,
            location: None,
        }
    }

    /// Add a Location header pointing to the created resource
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// The created entity
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The location of the created entity, if set
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Consume the response, returning the entity
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::CREATED, Json(&self.data)).into_response();

        if let Some(location) = self.location {
            if let Ok(header_value) = HeaderValue::from_str(&location) {
                response.headers_mut().insert(header::LOCATION, header_value);
            }
        }

        response
    }
}

/// HTTP 204 No Content response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
