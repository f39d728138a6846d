//! Page-level view layer
//!
//! Views that render one team of one project first confirm both exist and
//! send the browser home otherwise.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::projects::TeamItem;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::project::{Project, ProjectSummary};
use crate::domain::team::Team;
use crate::domain::DomainError;

pub const HOME_PATH: &str = "/";

/// `302 Found` pointing at [`HOME_PATH`]
pub fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, HOME_PATH)]).into_response()
}

/// Outcome of looking up a `(pid, tid)` pair
#[derive(Debug)]
pub enum ExistenceCheck {
    Found { team: Team, project: Project },
    RedirectHome,
}

impl ExistenceCheck {
    /// Split into `(team, project, redirect)`; exactly one side is populated
    pub fn into_parts(self) -> (Option<Team>, Option<Project>, Option<Response>) {
        match self {
            Self::Found { team, project } => (Some(team), Some(project), None),
            Self::RedirectHome => (None, None, Some(redirect_home())),
        }
    }

    /// True when both the team and its project exist
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Look up the team within its project, then the project.
///
/// A missing team short-circuits before the project is read. Storage errors
/// propagate.
pub async fn check_team_and_project(
    state: &AppState,
    pid: &str,
    tid: &str,
) -> Result<ExistenceCheck, DomainError> {
    let Some(team) = state.team_service.get(pid, tid).await? else {
        debug!(pid = %pid, tid = %tid, "Team not found, redirecting home");
        return Ok(ExistenceCheck::RedirectHome);
    };

    let Some(project) = state.project_service.get(pid).await? else {
        debug!(pid = %pid, "Project not found, redirecting home");
        return Ok(ExistenceCheck::RedirectHome);
    };

    Ok(ExistenceCheck::Found { team, project })
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectBrief {
    pub id: String,
    pub name: String,
    pub desc: String,
}

impl From<ProjectSummary> for ProjectBrief {
    fn from(summary: ProjectSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            name: summary.name,
            desc: summary.desc,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamPageOut {
    pub team: TeamItem,
    pub project: ProjectBrief,
}

/// Routes for page-level views
pub fn create_view_router() -> Router<AppState> {
    Router::new().route("/team/{pid}/{tid}", get(team_page))
}

/// GET /team/{pid}/{tid}
pub async fn team_page(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    Path((pid, tid)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let check = check_team_and_project(&state, &pid, &tid)
        .await
        .map_err(ApiError::from)?;

    Ok(match check {
        ExistenceCheck::Found { team, project } => Json(TeamPageOut {
            team: TeamItem::from(&team),
            project: ProjectSummary::from(project).into(),
        })
        .into_response(),
        ExistenceCheck::RedirectHome => redirect_home(),
    })
}
