//! In-memory storage implementation

use std::fmt::Debug;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::{Mutation, Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Thread-safe in-memory storage.
///
/// Entities are kept in insertion order so `list` is stable across calls.
/// Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entities: RwLock<Vec<E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }

    /// Creates storage pre-populated with entities; later duplicates of a key are dropped
    pub fn with_entities(entities: Vec<E>) -> Self {
        let mut unique: Vec<E> = Vec::with_capacity(entities.len());

        for entity in entities {
            if !unique.iter().any(|e| e.key() == entity.key()) {
                unique.push(entity);
            }
        }

        Self {
            entities: RwLock::new(unique),
        }
    }

    fn position(entities: &[E], key: &E::Key) -> Option<usize> {
        entities.iter().position(|e| e.key().as_str() == key.as_str())
    }
}

fn lock_error(kind: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::storage(format!("Failed to acquire {} lock: {}", kind, e))
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let entities = self.entities.read().map_err(|e| lock_error("read", e))?;

        Ok(Self::position(&entities, key).map(|i| entities[i].clone()))
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let entities = self.entities.read().map_err(|e| lock_error("read", e))?;

        Ok(entities.clone())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key();
        let mut entities = self.entities.write().map_err(|e| lock_error("write", e))?;

        if Self::position(&entities, &key).is_some() {
            return Err(DomainError::conflict(format!(
                "Entity with key '{}' already exists",
                key.as_str()
            )));
        }

        entities.push(entity.clone());
        Ok(entity)
    }

    async fn update_with(
        &self,
        key: &E::Key,
        mutation: Mutation<E>,
    ) -> Result<Option<E>, DomainError> {
        let mut entities = self.entities.write().map_err(|e| lock_error("write", e))?;

        let Some(index) = Self::position(&entities, key) else {
            return Ok(None);
        };

        mutation(&mut entities[index]);
        Ok(Some(entities[index].clone()))
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        let entities = self.entities.read().map_err(|e| lock_error("read", e))?;

        Ok(Self::position(&entities, key).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let entities = self.entities.read().map_err(|e| lock_error("read", e))?;

        Ok(entities.len())
    }
}
