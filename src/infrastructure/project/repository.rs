//! Storage-backed project repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::project::{Project, ProjectId, ProjectPatch, ProjectRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Project repository over any [`Storage`] backend
#[derive(Debug)]
pub struct StorageProjectRepository {
    storage: Arc<dyn Storage<Project>>,
}

impl StorageProjectRepository {
    /// Wrap an opened project storage
    pub fn new(storage: Arc<dyn Storage<Project>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl ProjectRepository for StorageProjectRepository {
    async fn all(&self) -> Result<Vec<Project>, DomainError> {
        self.storage.list().await
    }

    async fn get(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        self.storage.get(id).await
    }

    async fn update(&self, id: &ProjectId, patch: &ProjectPatch) -> Result<Project, DomainError> {
        let patch = patch.clone();

        self.storage
            .update_with(id, Box::new(move |project: &mut Project| project.apply(&patch)))
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Project '{}' not found", id)))
    }
}
