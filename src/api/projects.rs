//! Project endpoints: listing, owner updates and team listing

use axum::{
    extract::{Path, State},
    routing::{get, patch},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::project::{ActionDateInput, ProjectPatch, ProjectView};
use crate::domain::team::Team;
use crate::infrastructure::project::UpdateProjectRequest;

/// A project as listed. Non-owners only ever get `id`, `name` and `desc`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectItem {
    pub id: String,
    pub name: String,
    pub desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_drive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_staff: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_leader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mattermost_ch_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitlab_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volunteer_certificate_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_fee_doc: Option<String>,
}

impl From<ProjectView> for ProjectItem {
    fn from(view: ProjectView) -> Self {
        match view {
            ProjectView::Full(project) => Self {
                id: project.id().to_string(),
                name: project.name().to_string(),
                desc: project.desc().to_string(),
                owners: project
                    .owners()
                    .map(|owners| owners.iter().map(ToString::to_string).collect()),
                action_date: project.action_date(),
                calendar: project.calendar().map(String::from),
                shared_drive: project.shared_drive().map(String::from),
                mailing_staff: project.mailing_staff().map(String::from),
                mailing_leader: project.mailing_leader().map(String::from),
                mattermost_ch_id: project.mattermost_ch_id().map(String::from),
                gitlab_project_id: project.gitlab_project_id().map(String::from),
                volunteer_certificate_hours: project.volunteer_certificate_hours(),
                traffic_fee_doc: project.traffic_fee_doc().map(String::from),
            },
            ProjectView::Summary(summary) => Self {
                id: summary.id.to_string(),
                name: summary.name,
                desc: summary.desc,
                owners: None,
                action_date: None,
                calendar: None,
                shared_drive: None,
                mailing_staff: None,
                mailing_leader: None,
                mattermost_ch_id: None,
                gitlab_project_id: None,
                volunteer_certificate_hours: None,
                traffic_fee_doc: None,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectAllOut {
    pub datas: Vec<ProjectItem>,
}

/// PATCH body. Every field is optional and `null` means "leave unchanged".
/// `action_date` accepts a date/time string or integer epoch seconds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectItemUpdateInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub action_date: Option<ActionDateInput>,
    #[serde(default)]
    pub calendar: Option<String>,
    #[serde(default)]
    pub shared_drive: Option<String>,
    #[serde(default)]
    pub mailing_staff: Option<String>,
    #[serde(default)]
    pub mailing_leader: Option<String>,
    #[serde(default)]
    pub mattermost_ch_id: Option<String>,
    #[serde(default)]
    pub gitlab_project_id: Option<String>,
    #[serde(default)]
    pub volunteer_certificate_hours: Option<u32>,
    #[serde(default)]
    pub traffic_fee_doc: Option<String>,
}

impl From<ProjectItemUpdateInput> for UpdateProjectRequest {
    fn from(input: ProjectItemUpdateInput) -> Self {
        Self {
            name: input.name,
            desc: input.desc,
            action_date: input.action_date,
            calendar: input.calendar,
            shared_drive: input.shared_drive,
            mailing_staff: input.mailing_staff,
            mailing_leader: input.mailing_leader,
            mattermost_ch_id: input.mattermost_ch_id,
            gitlab_project_id: input.gitlab_project_id,
            volunteer_certificate_hours: input.volunteer_certificate_hours,
            traffic_fee_doc: input.traffic_fee_doc,
        }
    }
}

/// Echo of the fields written, with `action_date` already in epoch seconds
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProjectItemUpdateOutput(pub ProjectPatch);

/// A team as listed under its project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamItem {
    pub id: String,
    pub pid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub chiefs: Vec<String>,
    pub members: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headcount: Option<u32>,
    pub disabled: bool,
}

impl From<&Team> for TeamItem {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            pid: team.pid().to_string(),
            name: team.name().to_string(),
            desc: team.desc().map(String::from),
            chiefs: team.chiefs().iter().map(ToString::to_string).collect(),
            members: team.members().iter().map(ToString::to_string).collect(),
            mailing: team.mailing().map(String::from),
            headcount: team.headcount(),
            disabled: team.is_disabled(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectTeamsOutput {
    pub teams: Vec<TeamItem>,
}

pub fn create_projects_router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/{pid}", patch(update_project))
        .route("/projects/{pid}/teams", get(list_project_teams))
}

/// GET /projects
pub async fn list_projects(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<ProjectAllOut>, ApiError> {
    debug!(uid = %user.uid(), "Listing projects");

    let views = state
        .project_service
        .list_for(&user)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProjectAllOut {
        datas: views.into_iter().map(ProjectItem::from).collect(),
    }))
}

/// PATCH /projects/{pid} (owners only)
pub async fn update_project(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(pid): Path<String>,
    Json(input): Json<ProjectItemUpdateInput>,
) -> Result<Json<ProjectItemUpdateOutput>, ApiError> {
    debug!(uid = %user.uid(), pid = %pid, "Updating project");

    let patch = state
        .project_service
        .update(&user, &pid, input.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProjectItemUpdateOutput(patch)))
}

/// GET /projects/{pid}/teams
///
/// Any authenticated caller may list; an unknown project yields an empty list.
pub async fn list_project_teams(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    Path(pid): Path<String>,
) -> Result<Json<ProjectTeamsOutput>, ApiError> {
    debug!(pid = %pid, "Listing project teams");

    let teams = state
        .team_service
        .list_by_pid(&pid)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProjectTeamsOutput {
        teams: teams.iter().map(TeamItem::from).collect(),
    }))
}
