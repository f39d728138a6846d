//! Team repository trait

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::entity::{Team, TeamId};
use crate::domain::DomainError;
use crate::domain::project::ProjectId;

/// Read access to teams, always scoped by project
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get a team by id within a project
    async fn get(&self, pid: &ProjectId, tid: &TeamId) -> Result<Option<Team>, DomainError>;

    /// All teams of a project, empty when the project has none or does not exist
    async fn list_by_pid(&self, pid: &ProjectId) -> Result<Vec<Team>, DomainError>;
}
