//! Handler trait for REST collection endpoints
//!
//! Uses RPITIT so implementations can be written as plain `async fn`.

use std::future::Future;

use super::error::ApiError;
use super::response::{Created, NoContent};

/// Standard REST collection operations
///
/// Each method is one request: validate the input, make at most one store
/// call, and translate the outcome. Implementations keep no per-request state.
///
/// # Type Parameters
///
/// - `Id`: the identifier taken from the request path
/// - `Entity`: the entity type read from and written to request bodies
pub trait CollectionHandler<Id, Entity>: Send + Sync {
    /// Every entity in the collection
    fn list(&self) -> impl Future<Output = Result<Vec<Entity>, ApiError>> + Send;

    /// One entity by id
    ///
    /// # Errors
    ///
    /// `NotFound` if no entity has that id.
    fn get(&self, id: Id) -> impl Future<Output = Result<Entity, ApiError>> + Send;

    /// Create an entity; any id in `entity` is ignored
    fn create(&self, entity: Entity)
        -> impl Future<Output = Result<Created<Entity>, ApiError>> + Send;

    /// Replace every mutable field of the entity at `id`
    ///
    /// # Errors
    ///
    /// - `BadRequest` if `entity` carries an id other than `id`
    /// - `NotFound` if no entity has that id
    fn replace(
        &self,
        id: Id,
        entity: Entity,
    ) -> impl Future<Output = Result<NoContent, ApiError>> + Send;

    /// Delete the entity at `id`
    ///
    /// # Errors
    ///
    /// `NotFound` if no entity has that id.
    fn delete(&self, id: Id) -> impl Future<Output = Result<NoContent, ApiError>> + Send;
}
