//! Domain layer - Entities, value types and repository contracts

pub mod error;
pub mod id;
pub mod project;
pub mod storage;
pub mod team;
pub mod user;

pub use error::DomainError;
pub use project::{
    parse_action_date, ActionDateInput, Project, ProjectId, ProjectPatch, ProjectRepository,
    ProjectSummary, ProjectView,
};
pub use storage::{Storage, StorageEntity, StorageKey};
pub use team::{Team, TeamId, TeamKey, TeamRepository};
pub use user::{CurrentUser, UserId};
