//! Owner-dependent projections of a project

use super::entity::{Project, ProjectId};
use crate::domain::user::CurrentUser;

/// Fields any authenticated user may see
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
    pub desc: String,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().clone(),
            name: project.name().to_string(),
            desc: project.desc().to_string(),
        }
    }
}

impl From<Project> for ProjectSummary {
    fn from(project: Project) -> Self {
        Self::from(&project)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectView {
    /// Every stored field; only for owners
    Full(Project),
    Summary(ProjectSummary),
}

impl ProjectView {
    /// Full view for owners, summary for everyone else
    pub fn for_user(project: Project, user: &CurrentUser) -> Self {
        if project.is_owned_by(user.uid()) {
            Self::Full(project)
        } else {
            Self::Summary(ProjectSummary::from(project))
        }
    }

    /// Check if owner-only fields are included
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full(_))
    }
}
