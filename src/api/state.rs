//! Application state for shared services

use std::sync::Arc;

use crate::domain::project::{Project, ProjectPatch, ProjectRepository, ProjectView};
use crate::domain::team::{Team, TeamRepository};
use crate::domain::user::CurrentUser;
use crate::domain::DomainError;
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::project::{ProjectService, UpdateProjectRequest};
use crate::infrastructure::team::TeamService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<dyn ProjectServiceTrait>,
    pub team_service: Arc<dyn TeamServiceTrait>,
    pub jwt_service: Arc<dyn JwtGenerator>,
}

impl AppState {
    /// Wire services and the token verifier
    pub fn new(
        project_service: Arc<dyn ProjectServiceTrait>,
        team_service: Arc<dyn TeamServiceTrait>,
        jwt_service: Arc<dyn JwtGenerator>,
    ) -> Self {
        Self {
            project_service,
            team_service,
            jwt_service,
        }
    }
}

/// Trait for project service operations
#[async_trait::async_trait]
pub trait ProjectServiceTrait: Send + Sync {
    async fn list_for(&self, user: &CurrentUser) -> Result<Vec<ProjectView>, DomainError>;
    async fn get(&self, pid: &str) -> Result<Option<Project>, DomainError>;
    async fn update(
        &self,
        user: &CurrentUser,
        pid: &str,
        request: UpdateProjectRequest,
    ) -> Result<ProjectPatch, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

/// Trait for team service operations
#[async_trait::async_trait]
pub trait TeamServiceTrait: Send + Sync {
    async fn list_by_pid(&self, pid: &str) -> Result<Vec<Team>, DomainError>;
    async fn get(&self, pid: &str, tid: &str) -> Result<Option<Team>, DomainError>;
}

#[async_trait::async_trait]
impl<R: ProjectRepository + 'static> ProjectServiceTrait for ProjectService<R> {
    async fn list_for(&self, user: &CurrentUser) -> Result<Vec<ProjectView>, DomainError> {
        ProjectService::list_for(self, user).await
    }

    async fn get(&self, pid: &str) -> Result<Option<Project>, DomainError> {
        ProjectService::get(self, pid).await
    }

    async fn update(
        &self,
        user: &CurrentUser,
        pid: &str,
        request: UpdateProjectRequest,
    ) -> Result<ProjectPatch, DomainError> {
        ProjectService::update(self, user, pid, request).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        ProjectService::count(self).await
    }
}

#[async_trait::async_trait]
impl<R: TeamRepository + 'static> TeamServiceTrait for TeamService<R> {
    async fn list_by_pid(&self, pid: &str) -> Result<Vec<Team>, DomainError> {
        TeamService::list_by_pid(self, pid).await
    }

    async fn get(&self, pid: &str, tid: &str) -> Result<Option<Team>, DomainError> {
        TeamService::get(self, pid, tid).await
    }
}
