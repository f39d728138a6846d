//! Startup seed data for projects and teams

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::project::Project;
use crate::domain::storage::Storage;
use crate::domain::team::Team;
use crate::domain::DomainError;

/// Contents of a seed file: `{"projects": [...], "teams": [...]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// How many documents a seed run wrote and skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
}

impl SeedData {
    /// Parse seed data from a JSON document
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::configuration(format!("Invalid seed data: {}", e)))
    }

    /// Read and parse a seed file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::configuration(format!(
                "Failed to read seed file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Write every document whose key is not yet stored, in file order
    pub async fn apply(
        self,
        projects: &dyn Storage<Project>,
        teams: &dyn Storage<Team>,
    ) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();

        for project in self.projects {
            insert_if_absent(projects, project, &mut report).await?;
        }

        for team in self.teams {
            insert_if_absent(teams, team, &mut report).await?;
        }

        info!(created = report.created, skipped = report.skipped, "Seed data applied");
        Ok(report)
    }
}

async fn insert_if_absent<E>(
    storage: &dyn Storage<E>,
    entity: E,
    report: &mut SeedReport,
) -> Result<(), DomainError>
where
    E: crate::domain::storage::StorageEntity + 'static,
{
    use crate::domain::storage::StorageKey;

    let key = entity.key();

    if storage.exists(&key).await? {
        debug!(key = key.as_str(), "Seed document already stored, skipping");
        report.skipped += 1;
        return Ok(());
    }

    storage.create(entity).await?;
    report.created += 1;
    Ok(())
}
