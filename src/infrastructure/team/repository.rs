//! Storage-backed team repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::project::ProjectId;
use crate::domain::storage::Storage;
use crate::domain::team::{Team, TeamId, TeamKey, TeamRepository};
use crate::domain::DomainError;

/// Storage-backed implementation of TeamRepository
#[derive(Debug)]
pub struct StorageTeamRepository {
    storage: Arc<dyn Storage<Team>>,
}

impl StorageTeamRepository {
    /// Wrap an opened team storage
    pub fn new(storage: Arc<dyn Storage<Team>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl TeamRepository for StorageTeamRepository {
    async fn get(&self, pid: &ProjectId, tid: &TeamId) -> Result<Option<Team>, DomainError> {
        let team = self.storage.get(&TeamKey::new(pid, tid)).await?;

        // A stored document whose pid disagrees with its key is treated as missing
        Ok(team.filter(|t| t.belongs_to(pid)))
    }

    async fn list_by_pid(&self, pid: &ProjectId) -> Result<Vec<Team>, DomainError> {
        let teams = self.storage.list().await?;

        Ok(teams.into_iter().filter(|t| t.belongs_to(pid)).collect())
    }
}
