//! Storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::StorageEntity;

/// In-place change applied to a stored entity by [`Storage::update_with`]
pub type Mutation<E> = Box<dyn FnOnce(&mut E) + Send>;

/// Point lookups and writes over one entity type.
///
/// `list` returns entities in the backend's enumeration order, which for every
/// shipped backend is insertion order.
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    /// Get an entity by key
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// All entities in backend enumeration order
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    /// Creates a new entity, fails with `Conflict` if the key is taken
    async fn create(&self, entity: E) -> Result<E, DomainError>;

    /// Applies `mutation` to the stored entity and persists the result as one
    /// atomic step. Returns `None` when the key is unknown.
    ///
    /// Concurrent calls on the same key are serialized, so each mutation sees
    /// the writes of the ones before it.
    async fn update_with(
        &self,
        key: &E::Key,
        mutation: Mutation<E>,
    ) -> Result<Option<E>, DomainError>;

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }
}
