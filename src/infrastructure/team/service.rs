//! Team service for read access to project teams

use std::sync::Arc;

use tracing::debug;

use crate::domain::project::ProjectId;
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::DomainError;

/// Team service. Ids arrive as raw path segments; an id that cannot be valid
/// names nothing, so lookups with it find nothing.
#[derive(Debug)]
pub struct TeamService<R: TeamRepository> {
    repository: Arc<R>,
}

impl<R: TeamRepository> TeamService<R> {
    /// Create a service over `repository`
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Teams whose parent is `pid`, in storage order
    pub async fn list_by_pid(&self, pid: &str) -> Result<Vec<Team>, DomainError> {
        let Ok(pid) = ProjectId::new(pid) else {
            debug!(pid = %pid, "Invalid project id, no teams");
            return Ok(Vec::new());
        };

        self.repository.list_by_pid(&pid).await
    }

    /// A team looked up within its project
    pub async fn get(&self, pid: &str, tid: &str) -> Result<Option<Team>, DomainError> {
        let (Ok(pid), Ok(tid)) = (ProjectId::new(pid), TeamId::new(tid)) else {
            return Ok(None);
        };

        self.repository.get(&pid, &tid).await
    }
}
