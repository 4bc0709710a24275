//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::handlers::TodoItemsHandler;
use crate::repository::TodoStore;

/// Application state shared across handlers
///
/// Generic over the store so the router can be built on any [`TodoStore`].
#[derive(Debug)]
pub struct AppState<S> {
    config: Arc<Config>,
    items: TodoItemsHandler<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            items: self.items.clone(),
        }
    }
}

impl<S: TodoStore> AppState<S> {
    /// Create state around `store`
    pub fn new(config: Config, store: S) -> Self {
        Self {
            config: Arc::new(config),
            items: TodoItemsHandler::new(store),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The todo item handler
    pub fn items(&self) -> &TodoItemsHandler<S> {
        &self.items
    }

    /// The item store
    pub fn store(&self) -> &S {
        self.items.store()
    }
}
