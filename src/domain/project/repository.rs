//! Project repository trait

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::entity::{Project, ProjectId};
use super::patch::ProjectPatch;
use crate::domain::DomainError;

/// Data access for projects
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync + std::fmt::Debug {
    /// All projects in storage enumeration order
    async fn all(&self) -> Result<Vec<Project>, DomainError>;

    /// Get a project by id
    async fn get(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// Merge `patch` into the stored project and return the new state
    async fn update(&self, id: &ProjectId, patch: &ProjectPatch) -> Result<Project, DomainError>;
}
