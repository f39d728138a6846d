//! Project service: listing with redaction and owner-gated updates

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::project::{
    parse_action_date, ActionDateInput, Project, ProjectId, ProjectPatch, ProjectRepository,
    ProjectView,
};
use crate::domain::user::CurrentUser;
use crate::domain::DomainError;
use crate::infrastructure::observability::{record_project_update, UpdateOutcome};

/// Raw update request; `action_date` is not yet normalized
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub action_date: Option<ActionDateInput>,
    pub calendar: Option<String>,
    pub shared_drive: Option<String>,
    pub mailing_staff: Option<String>,
    pub mailing_leader: Option<String>,
    pub mattermost_ch_id: Option<String>,
    pub gitlab_project_id: Option<String>,
    pub volunteer_certificate_hours: Option<u32>,
    pub traffic_fee_doc: Option<String>,
}

impl UpdateProjectRequest {
    /// Convert into a patch, turning `action_date` into epoch seconds
    pub fn normalize(self) -> Result<ProjectPatch, DomainError> {
        let action_date = self
            .action_date
            .as_ref()
            .map(parse_action_date)
            .transpose()?;

        Ok(ProjectPatch {
            name: self.name,
            desc: self.desc,
            action_date,
            calendar: self.calendar,
            shared_drive: self.shared_drive,
            mailing_staff: self.mailing_staff,
            mailing_leader: self.mailing_leader,
            mattermost_ch_id: self.mattermost_ch_id,
            gitlab_project_id: self.gitlab_project_id,
            volunteer_certificate_hours: self.volunteer_certificate_hours,
            traffic_fee_doc: self.traffic_fee_doc,
        })
    }
}

/// Project service: ownership checks and patch normalization over a repository
#[derive(Debug)]
pub struct ProjectService<R: ProjectRepository> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Create a service over `repository`
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Every project, full for its owners and summarized for everyone else
    pub async fn list_for(&self, user: &CurrentUser) -> Result<Vec<ProjectView>, DomainError> {
        let projects = self.repository.all().await?;
        debug!(uid = %user.uid(), count = projects.len(), "Listing projects");

        Ok(projects
            .into_iter()
            .map(|project| ProjectView::for_user(project, user))
            .collect())
    }

    /// Look up a project; an id that cannot be valid finds nothing
    pub async fn get(&self, pid: &str) -> Result<Option<Project>, DomainError> {
        let Ok(id) = ProjectId::new(pid) else {
            return Ok(None);
        };

        self.repository.get(&id).await
    }

    /// Apply an owner's partial update and return the normalized fields written.
    ///
    /// Checks run in order: existence (NotFound), ownership (Unauthorized),
    /// then `action_date` parsing (InvalidField). Nothing is written unless
    /// all three pass.
    pub async fn update(
        &self,
        user: &CurrentUser,
        pid: &str,
        request: UpdateProjectRequest,
    ) -> Result<ProjectPatch, DomainError> {
        let result = self.try_update(user, pid, request).await;

        record_project_update(match &result {
            Ok(_) => UpdateOutcome::Applied,
            Err(DomainError::NotFound { .. }) => UpdateOutcome::NotFound,
            Err(DomainError::Unauthorized { .. }) => UpdateOutcome::Unauthorized,
            Err(DomainError::InvalidField { .. }) => UpdateOutcome::Invalid,
            Err(_) => UpdateOutcome::Failed,
        });

        result
    }

    async fn try_update(
        &self,
        user: &CurrentUser,
        pid: &str,
        request: UpdateProjectRequest,
    ) -> Result<ProjectPatch, DomainError> {
        let project = self
            .get(pid)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Project '{}' not found", pid)))?;

        if !project.is_owned_by(user.uid()) {
            warn!(pid = %pid, uid = %user.uid(), "Project update rejected, caller is not an owner");
            return Err(DomainError::unauthorized("owners permission required"));
        }

        let patch = request.normalize()?;

        if patch.is_empty() {
            debug!(pid = %pid, "Empty project update, nothing to write");
            return Ok(patch);
        }

        self.repository.update(project.id(), &patch).await?;
        info!(pid = %pid, uid = %user.uid(), "Project updated");

        Ok(patch)
    }

    /// Number of stored projects; doubles as a storage liveness probe
    pub async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.repository.all().await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::MockProjectRepository;
    use crate::domain::user::UserId;
    use mockall::predicate::always;

    fn user(uid: &str) -> CurrentUser {
        CurrentUser::new(UserId::new(uid).unwrap())
    }

    fn alpha() -> Project {
        Project::new(ProjectId::new("p1").unwrap(), "Alpha", "d")
            .with_owners(vec![UserId::new("u1").unwrap()])
    }

    fn repo_with_alpha() -> MockProjectRepository {
        let mut repo = MockProjectRepository::new();
        repo.expect_get()
            .returning(|id| Ok((id.as_str() == "p1").then(alpha)));
        repo
    }

    fn action_date_request(value: &str) -> UpdateProjectRequest {
        UpdateProjectRequest {
            action_date: Some(ActionDateInput::from(value)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_for_redacts_per_owner() {
        let mut repo = MockProjectRepository::new();
        repo.expect_all().returning(|| {
            Ok(vec![
                alpha(),
                Project::new(ProjectId::new("p2").unwrap(), "Beta", "b"),
            ])
        });
        let service = ProjectService::new(Arc::new(repo));

        let views = service.list_for(&user("u1")).await.unwrap();
        assert!(views[0].is_full());
        assert!(!views[1].is_full());

        let views = service.list_for(&user("u2")).await.unwrap();
        assert!(views.iter().all(|v| !v.is_full()));
    }

    #[tokio::test]
    async fn test_update_by_owner_normalizes_and_persists() {
        let mut repo = repo_with_alpha();
        repo.expect_update()
            .withf(|id, patch| id.as_str() == "p1" && patch.action_date == Some(1_704_067_200))
            .times(1)
            .returning(|_, patch| {
                let mut project = alpha();
                project.apply(patch);
                Ok(project)
            });
        let service = ProjectService::new(Arc::new(repo));

        let patch = service
            .update(&user("u1"), "p1", action_date_request("2024-01-01T00:00:00Z"))
            .await
            .unwrap();

        assert_eq!(
            patch,
            ProjectPatch {
                action_date: Some(1_704_067_200),
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn test_update_missing_project_is_not_found() {
        let mut repo = repo_with_alpha();
        repo.expect_update().never();
        let service = ProjectService::new(Arc::new(repo));

        let err = service
            .update(&user("u1"), "missing", UpdateProjectRequest::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_invalid_pid_is_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get().never();
        let service = ProjectService::new(Arc::new(repo));

        let err = service
            .update(&user("u1"), "bad id", UpdateProjectRequest::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_by_non_owner_is_unauthorized() {
        let mut repo = repo_with_alpha();
        repo.expect_update().never();
        let service = ProjectService::new(Arc::new(repo));

        let err = service
            .update(&user("u2"), "p1", action_date_request("2024-01-01"))
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_update_without_owner_list_is_unauthorized() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get()
            .returning(|_| Ok(Some(Project::new(ProjectId::new("p3").unwrap(), "Gamma", ""))));
        repo.expect_update().never();
        let service = ProjectService::new(Arc::new(repo));

        let err = service
            .update(&user("u1"), "p3", UpdateProjectRequest::default())
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_ownership_checked_before_date_parsing() {
        let mut repo = repo_with_alpha();
        repo.expect_update().never();
        let service = ProjectService::new(Arc::new(repo));

        let err = service
            .update(&user("u2"), "p1", action_date_request("garbage"))
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_unparsable_action_date_writes_nothing() {
        let mut repo = repo_with_alpha();
        repo.expect_update().never();
        let service = ProjectService::new(Arc::new(repo));

        let err = service
            .update(&user("u1"), "p1", action_date_request("next tuesday"))
            .await
            .unwrap_err();

        match err {
            DomainError::InvalidField { field, .. } => assert_eq!(field, "action_date"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_update_skips_write() {
        let mut repo = repo_with_alpha();
        repo.expect_update().never();
        let service = ProjectService::new(Arc::new(repo));

        let patch = service
            .update(&user("u1"), "p1", UpdateProjectRequest::default())
            .await
            .unwrap();
        assert!(patch.is_empty());
    }

    #[tokio::test]
    async fn test_update_storage_error_propagates() {
        let mut repo = repo_with_alpha();
        repo.expect_update()
            .with(always(), always())
            .returning(|_, _| Err(DomainError::storage("write failed")));
        let service = ProjectService::new(Arc::new(repo));

        let request = UpdateProjectRequest {
            name: Some("Alpha 2".to_string()),
            ..Default::default()
        };
        let result = service.update(&user("u1"), "p1", request).await;

        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[test]
    fn test_normalize_integer_action_date() {
        let request = UpdateProjectRequest {
            action_date: Some(ActionDateInput::from(1_700_000_000)),
            mailing_staff: Some("staff@example.org".to_string()),
            ..Default::default()
        };

        let patch = request.normalize().unwrap();
        assert_eq!(patch.action_date, Some(1_700_000_000));
        assert_eq!(patch.mailing_staff.as_deref(), Some("staff@example.org"));
    }
}
