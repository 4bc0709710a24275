//! Todo item collection handler

use std::sync::Arc;

use super::error::{ApiError, ApiOperation};
use super::response::{Created, NoContent};
use super::traits::CollectionHandler;
use crate::model::{TodoId, TodoItem};
use crate::repository::TodoStore;

const ENTITY: &str = "TodoItem";

/// Base path of the collection, used to build `Location` headers
pub const ITEMS_PATH: &str = "/items";

/// Handles requests against the todo item collection
///
/// Owns nothing but a shared handle to the store; every call is independent.
#[derive(Debug)]
pub struct TodoItemsHandler<S> {
    store: Arc<S>,
}

impl<S> Clone for TodoItemsHandler<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: TodoStore> TodoItemsHandler<S> {
    /// Wrap a store
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: TodoStore> CollectionHandler<TodoId, TodoItem> for TodoItemsHandler<S> {
    async fn list(&self) -> Result<Vec<TodoItem>, ApiError> {
        let items = self.store.list().await?;
        tracing::debug!(count = items.len(), "Listed todo items");
        Ok(items)
    }

    async fn get(&self, id: TodoId) -> Result<TodoItem, ApiError> {
        self.store
            .get(&id)
            .await?
            .ok_or_else(|| ApiError::not_found(ApiOperation::Get, ENTITY, id))
    }

    async fn create(&self, item: TodoItem) -> Result<Created<TodoItem>, ApiError> {
        let created = self.store.add(item).await?;
        tracing::info!(id = created.id, "Created todo item");

        let location = format!("{}/{}", ITEMS_PATH, created.id);
        Ok(Created::new(created).with_location(location))
    }

    async fn replace(&self, id: TodoId, item: TodoItem) -> Result<NoContent, ApiError> {
        if item.id != id {
            return Err(ApiError::bad_request(
                ApiOperation::Replace,
                format!("body id {} does not match path id {}", item.id, id),
            )
            .with_entity(ENTITY, id));
        }

        self.store.update(&id, item).await?;
        tracing::info!(id, "Replaced todo item");
        Ok(NoContent)
    }

    async fn delete(&self, id: TodoId) -> Result<NoContent, ApiError> {
        self.store.remove(&id).await?;
        tracing::info!(id, "Deleted todo item");
        Ok(NoContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::ApiErrorKind;
    use crate::repository::MemoryStore;

    async fn seeded() -> TodoItemsHandler<MemoryStore> {
        let store = MemoryStore::with_items([
            TodoItem::new(1, "Task 1", true),
            TodoItem::new(2, "Task 2", false),
        ])
        .await
        .unwrap();
        TodoItemsHandler::new(store)
    }

    #[tokio::test]
    async fn get_all_returns_seeded_items() {
        let handler = seeded().await;
        let items = handler.list().await.unwrap();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn get_by_id_returns_item() {
        let handler = seeded().await;
        let item = handler.get(1).await.unwrap();
        assert_eq!(item, TodoItem::new(1, "Task 1", true));
    }

    #[tokio::test]
    async fn get_by_id_missing_is_not_found() {
        let handler = seeded().await;
        let err = handler.get(99).await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert_eq!(err.operation, ApiOperation::Get);
    }

    #[tokio::test]
    async fn replace_with_mismatched_id_is_bad_request() {
        let handler = seeded().await;
        let err = handler
            .replace(1, TodoItem::new(2, "Task 2", false))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::BadRequest);

        assert_eq!(handler.get(1).await.unwrap(), TodoItem::new(1, "Task 1", true));
        assert_eq!(handler.get(2).await.unwrap(), TodoItem::new(2, "Task 2", false));
    }

    #[tokio::test]
    async fn replace_missing_item_is_not_found() {
        let handler = seeded().await;
        let err = handler
            .replace(
                3,
                TodoItem {
                    id: 3,
                    ..TodoItem::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert_eq!(err.operation, ApiOperation::Replace);
    }

    #[tokio::test]
    async fn replace_existing_item_keeps_count() {
        let handler = seeded().await;
        let result = handler.replace(2, TodoItem::new(2, "Task 2", true)).await;
        assert_eq!(result, Ok(NoContent));

        assert_eq!(handler.store().count().await.unwrap(), 2);
        assert!(handler.get(2).await.unwrap().is_complete);
    }

    #[tokio::test]
    async fn create_adds_item_with_location() {
        let handler = seeded().await;
        let created = handler
            .create(TodoItem {
                id: 0,
                name: Some("Task 3".to_string()),
                is_complete: false,
            })
            .await
            .unwrap();

        assert_eq!(created.data(), &TodoItem::new(3, "Task 3", false));
        assert_eq!(created.location(), Some("/items/3"));
        assert_eq!(handler.store().count().await.unwrap(), 3);
        assert_eq!(handler.get(3).await.unwrap(), created.into_data());
    }

    #[tokio::test]
    async fn delete_removes_item() {
        let handler = seeded().await;
        assert_eq!(handler.delete(2).await, Ok(NoContent));

        assert_eq!(handler.store().count().await.unwrap(), 1);
        assert_eq!(
            handler.get(2).await.unwrap_err().kind,
            ApiErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn delete_missing_item_is_not_found() {
        let handler = seeded().await;
        let err = handler.delete(3).await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert_eq!(err.operation, ApiOperation::Delete);
        assert_eq!(handler.store().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn created_items_round_trip_through_get() {
        let handler = TodoItemsHandler::new(MemoryStore::new());
        let inputs = [
            TodoItem::new(0, "first", false),
            TodoItem::new(7, "second", true),
            TodoItem::default(),
        ];

        for input in inputs {
            let created = handler.create(input.clone()).await.unwrap().into_data();
            assert_eq!(created.name, input.name);
            assert_eq!(created.is_complete, input.is_complete);
            assert_eq!(handler.get(created.id).await.unwrap(), created);
        }

        assert_eq!(handler.list().await.unwrap().len(), 3);
    }
}
