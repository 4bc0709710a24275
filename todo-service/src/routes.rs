//! HTTP routes
//!
//! | Method | Path          | Success              | Failure  |
//! |--------|---------------|----------------------|----------|
//! | GET    | `/items`      | 200 + item array     |          |
//! | POST   | `/items`      | 201 + item, Location |          |
//! | GET    | `/items/{id}` | 200 + item           | 404      |
//! | PUT    | `/items/{id}` | 204                  | 400, 404 |
//! | DELETE | `/items/{id}` | 204                  | 404      |
//! | GET    | `/health`     | 200                  |          |
//! | GET    | `/ready`      | 200                  | 503      |

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::handlers::{ApiError, CollectionHandler, Created, NoContent, ITEMS_PATH};
use crate::health::{health, readiness};
use crate::model::{TodoId, TodoItem};
use crate::repository::TodoStore;
use crate::state::AppState;

/// Build the service router over `state`
pub fn router<S: TodoStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route(ITEMS_PATH, get(list_items::<S>).post(create_item::<S>))
        .route(
            "/items/{id}",
            get(get_item::<S>)
                .put(replace_item::<S>)
                .delete(delete_item::<S>),
        )
        .route("/health", get(health::<S>))
        .route("/ready", get(readiness::<S>))
        .with_state(state)
}

async fn list_items<S: TodoStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<TodoItem>>, ApiError> {
    Ok(Json(state.items().list().await?))
}

async fn get_item<S: TodoStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<TodoId>,
) -> Result<Json<TodoItem>, ApiError> {
    Ok(Json(state.items().get(id).await?))
}

async fn create_item<S: TodoStore>(
    State(state): State<AppState<S>>,
    Json(item): Json<TodoItem>,
) -> Result<Created<TodoItem>, ApiError> {
    state.items().create(item).await
}

async fn replace_item<S: TodoStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<TodoId>,
    Json(item): Json<TodoItem>,
) -> Result<NoContent, ApiError> {
    state.items().replace(id, item).await
}

async fn delete_item<S: TodoStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<TodoId>,
) -> Result<NoContent, ApiError> {
    state.items().delete(id).await
}
