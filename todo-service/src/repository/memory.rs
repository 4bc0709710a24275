//! In-memory todo store

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use super::error::{RepositoryError, RepositoryOperation};
use super::traits::{RepositoryResult, TodoStore};
use crate::model::{TodoId, TodoItem};

const ENTITY: &str = "TodoItem";

/// Collection plus id counter, guarded together so id assignment and
/// insertion happen under the same write lock.
#[derive(Debug)]
struct Inner {
    items: BTreeMap<TodoId, TodoItem>,
    next_id: TodoId,
}

impl Inner {
    /// Hand out the next id; `TodoId::MAX` is never assigned
    fn allocate_id(&mut self) -> RepositoryResult<TodoId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| {
            RepositoryError::exhausted(RepositoryOperation::Add, "no todo ids left to assign")
        })?;
        Ok(id)
    }
}

/// Process-local store backed by an ordered map
///
/// Ids start at 1 and only ever grow; a removed id is never handed out again.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with `items`, keeping their ids
    ///
    /// # Errors
    ///
    /// Fails on the first item that [`MemoryStore::insert`] rejects.
    pub async fn with_items(items: impl IntoIterator<Item = TodoItem>) -> RepositoryResult<Self> {
        let store = Self::new();
        for item in items {
            store.insert(item).await?;
        }
        Ok(store)
    }

    /// Persist `item` under its own id
    ///
    /// Used for fixtures and configured seed data. The id counter moves past
    /// `item.id` so later [`TodoStore::add`] calls never collide with it.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `item.id` is not positive or is `TodoId::MAX`
    /// - `AlreadyExists` if the id is taken
    pub async fn insert(&self, item: TodoItem) -> RepositoryResult<TodoItem> {
        if item.id <= 0 || item.id == TodoId::MAX {
            return Err(RepositoryError::validation_failed(
                RepositoryOperation::Insert,
                format!("id must be in 1..{}, got {}", TodoId::MAX, item.id),
            ));
        }

        let mut inner = self.inner.write().await;
        if inner.items.contains_key(&item.id) {
            return Err(RepositoryError::already_exists(ENTITY, item.id));
        }

        inner.next_id = inner.next_id.max(item.id + 1);
        inner.items.insert(item.id, item.clone());
        tracing::debug!(id = item.id, "Inserted todo item");
        Ok(item)
    }
}

impl TodoStore for MemoryStore {
    async fn list(&self) -> RepositoryResult<Vec<TodoItem>> {
        let inner = self.inner.read().await;
        Ok(inner.items.values().cloned().collect())
    }

    async fn get(&self, id: &TodoId) -> RepositoryResult<Option<TodoItem>> {
        let inner = self.inner.read().await;
        Ok(inner.items.get(id).cloned())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let inner = self.inner.read().await;
        Ok(inner.items.len() as u64)
    }

    async fn add(&self, item: TodoItem) -> RepositoryResult<TodoItem> {
        let mut inner = self.inner.write().await;
        let id = inner.allocate_id()?;
        let stored = TodoItem { id, ..item };
        inner.items.insert(id, stored.clone());
        tracing::debug!(id, "Added todo item");
        Ok(stored)
    }

    async fn update(&self, id: &TodoId, item: TodoItem) -> RepositoryResult<()> {
        let mut inner = self.inner.write().await;
        let stored = inner
            .items
            .get_mut(id)
            .ok_or_else(|| RepositoryError::not_found(RepositoryOperation::Update, ENTITY, id))?;
        stored.overwrite_from(item);
        tracing::debug!(id, "Updated todo item");
        Ok(())
    }

    async fn remove(&self, id: &TodoId) -> RepositoryResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .items
            .remove(id)
            .ok_or_else(|| RepositoryError::not_found(RepositoryOperation::Remove, ENTITY, id))?;
        tracing::debug!(id, "Removed todo item");
        Ok(())
    }
}
