//! PMP Project Hub
//!
//! Project and team management API for volunteer-run events:
//! - Project listing with owner-only field visibility
//! - Owner updates of project metadata
//! - Team listing per project and a team page existence check

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod view;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::project::Project;
use domain::storage::Storage;
use domain::team::Team;
use infrastructure::{
    auth::{JwtConfig, JwtGenerator, JwtService},
    project::{ProjectService, StorageProjectRepository},
    seed::SeedData,
    storage::{StorageConfig, StorageFactory, StorageType},
    team::{StorageTeamRepository, TeamService},
};
use rand::Rng;
use tracing::{info, warn};

const PROJECTS_TABLE: &str = "projects";
const TEAMS_TABLE: &str = "teams";

/// Wire services over already-opened storages
pub fn build_app_state(
    projects: Arc<dyn Storage<Project>>,
    teams: Arc<dyn Storage<Team>>,
    jwt_service: Arc<dyn JwtGenerator>,
) -> AppState {
    let project_repository = Arc::new(StorageProjectRepository::new(projects));
    let team_repository = Arc::new(StorageTeamRepository::new(teams));

    AppState::new(
        Arc::new(ProjectService::new(project_repository)),
        Arc::new(TeamService::new(team_repository)),
        jwt_service,
    )
}

/// Open storage, apply seed data and build the application state
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = storage_config_from(config)?;
    info!("Storage backend: {:?}", storage_config.storage_type());

    let backend = StorageFactory::connect(&storage_config).await?;
    let projects = backend.storage::<Project>(PROJECTS_TABLE).await?;
    let teams = backend.storage::<Team>(TEAMS_TABLE).await?;

    if let Some(path) = &config.storage.seed_path {
        info!(path = %path, "Loading seed data");
        SeedData::from_file(path)
            .await?
            .apply(projects.as_ref(), teams.as_ref())
            .await?;
    }

    let jwt_service = create_jwt_service(config);

    Ok(build_app_state(projects, teams, jwt_service))
}

fn storage_config_from(config: &AppConfig) -> anyhow::Result<StorageConfig> {
    let backend = &config.storage.backend;
    let storage_type = StorageType::parse(backend)
        .ok_or_else(|| anyhow::anyhow!("Unknown storage backend '{}'", backend))?;

    match storage_type {
        StorageType::InMemory => Ok(StorageConfig::in_memory()),
        StorageType::Postgres => {
            let url = config.storage.resolved_database_url().ok_or_else(|| {
                anyhow::anyhow!("Postgres storage requires storage.database_url or DATABASE_URL")
            })?;
            Ok(StorageConfig::postgres_url(url))
        }
    }
}

/// Generate a random JWT secret
fn generate_random_secret() -> String {
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

fn create_jwt_service(config: &AppConfig) -> Arc<dyn JwtGenerator> {
    let secret = config.auth.resolved_secret().unwrap_or_else(|| {
        warn!(
            "No JWT_SECRET configured. Generating random secret. \
            Tokens will NOT survive a restart."
        );
        generate_random_secret()
    });

    Arc::new(JwtService::new(JwtConfig::new(
        secret,
        config.auth.jwt_expiration_hours,
    )))
}
