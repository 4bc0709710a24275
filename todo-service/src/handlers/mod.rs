//! Request handlers for the todo item collection
//!
//! [`TodoItemsHandler`] implements the five REST collection operations
//! ([`CollectionHandler`]) on top of any [`TodoStore`](crate::repository::TodoStore).
//! Failures surface as [`ApiError`], which turns into a bare status code.
//!
//! # Example
//!
//! ```rust,ignore
//! use todo_service::handlers::{CollectionHandler, TodoItemsHandler};
//! use todo_service::model::TodoItem;
//! use todo_service::repository::MemoryStore;
//!
//! let handler = TodoItemsHandler::new(MemoryStore::new());
//! let created = handler.create(TodoItem::new(0, "Buy milk", false)).await?;
//! assert_eq!(created.location(), Some("/items/1"));
//! ```

mod error;
mod items;
mod response;
mod traits;

pub use error::{ApiError, ApiErrorKind, ApiOperation};
pub use items::{TodoItemsHandler, ITEMS_PATH};
pub use response::{Created, NoContent};
pub use traits::CollectionHandler;
