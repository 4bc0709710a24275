//! Todo item store
//!
//! The [`TodoStore`] trait is the seam between request handlers and storage.
//! [`MemoryStore`] is the process-local implementation; it owns the collection
//! and the id counter behind a single lock.
//!
//! # Example
//!
//! ```rust,ignore
//! use todo_service::model::TodoItem;
//! use todo_service::repository::{MemoryStore, TodoStore};
//!
//! let store = MemoryStore::with_items([TodoItem::new(1, "Task 1", true)]).await?;
//! let created = store.add(TodoItem::new(0, "Task 2", false)).await?;
//! assert_eq!(created.id, 2);
//!
//! store.remove(&1).await?;
//! assert_eq!(store.count().await?, 1);
//! ```

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use memory::MemoryStore;
pub use traits::{RepositoryResult, TodoStore};
