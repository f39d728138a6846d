//! Project domain module
//!
//! A project is the top-level organizational unit. Its `owners` list decides
//! who may see its full detail and who may change it.

mod action_date;
mod entity;
mod patch;
mod repository;
mod view;

pub use action_date::{parse_action_date, ActionDateInput};
pub use entity::{Project, ProjectId};
pub use patch::ProjectPatch;
pub use repository::ProjectRepository;
pub use view::{ProjectSummary, ProjectView};

#[cfg(test)]
pub use repository::MockProjectRepository;
