//! # todo-service
//!
//! A small HTTP service that manages an in-memory collection of todo items.
//!
//! ## Features
//!
//! - **CRUD**: list, get, create, replace and delete items under `/items`
//! - **Store**: async [`TodoStore`](repository::TodoStore) trait with an in-memory implementation
//! - **Middleware stack**: request tracking, panic recovery, body size limits, timeouts, CORS
//! - **Health checks**: liveness and readiness probes
//! - **Graceful shutdown**: SIGTERM and SIGINT handling
//!
//! ## Example
//!
//! ```rust,no_run
//! use todo_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config);
//!
//!     let store = MemoryStore::with_items(config.store.seed.clone()).await?;
//!     let app = router(AppState::new(config.clone(), store));
//!
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod middleware;
pub mod model;
pub mod observability;
pub mod repository;
pub mod routes;
pub mod server;
pub mod state;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, CorsMode, LogFormat, MiddlewareConfig, ServiceConfig};
    pub use crate::error::{Error, Result};
    pub use crate::handlers::{
        ApiError, ApiErrorKind, ApiOperation, CollectionHandler, Created, NoContent,
        TodoItemsHandler,
    };
    pub use crate::health::{health, readiness};
    pub use crate::model::{TodoId, TodoItem};
    pub use crate::observability::init_tracing;
    pub use crate::repository::{MemoryStore, RepositoryError, TodoStore};
    pub use crate::routes::router;
    pub use crate::server::Server;
    pub use crate::state::AppState;
}
