//! Store trait definition
//!
//! Uses RPITIT (return position `impl Trait` in traits) so implementations can
//! be written as plain `async fn` without `async_trait`.

use std::future::Future;

use super::error::RepositoryError;
use crate::model::{TodoId, TodoItem};

/// Result type for store operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// The collection of todo items
///
/// Implementations own the authoritative collection. Callers get clones back
/// and never hold references into the store across calls.
///
/// # Example
///
/// ```rust,ignore
/// use todo_service::model::TodoItem;
/// use todo_service::repository::{MemoryStore, TodoStore};
///
/// let store = MemoryStore::new();
/// let created = store.add(TodoItem::new(0, "Write docs", false)).await?;
/// assert_eq!(created.id, 1);
/// assert_eq!(store.get(&1).await?, Some(created));
/// ```
pub trait TodoStore: Send + Sync {
    /// All items, ordered by id
    fn list(&self) -> impl Future<Output = RepositoryResult<Vec<TodoItem>>> + Send;

    /// Look up one item; `Ok(None)` when absent
    fn get(&self, id: &TodoId) -> impl Future<Output = RepositoryResult<Option<TodoItem>>> + Send;

    /// Number of live items
    fn count(&self) -> impl Future<Output = RepositoryResult<u64>> + Send;

    /// Persist `item` under a freshly assigned id, ignoring `item.id`
    fn add(&self, item: TodoItem) -> impl Future<Output = RepositoryResult<TodoItem>> + Send;

    /// Overwrite the mutable fields of the item stored under `id`
    ///
    /// # Errors
    ///
    /// `NotFound` if no item has that id.
    fn update(
        &self,
        id: &TodoId,
        item: TodoItem,
    ) -> impl Future<Output = RepositoryResult<()>> + Send;

    /// Delete the item stored under `id`
    ///
    /// # Errors
    ///
    /// `NotFound` if no item has that id.
    fn remove(&self, id: &TodoId) -> impl Future<Output = RepositoryResult<()>> + Send;
}
