//! Team domain module
//!
//! Teams belong to exactly one project and are addressed by `(pid, tid)`.

mod entity;
mod repository;

pub use entity::{Team, TeamId, TeamKey};
pub use repository::TeamRepository;

#[cfg(test)]
pub use repository::MockTeamRepository;
