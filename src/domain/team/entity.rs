//! Team entity and related types

use serde::{Deserialize, Serialize};

use crate::domain::id::define_entity_id;
use crate::domain::project::ProjectId;
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::user::UserId;

define_entity_id! {
    /// Team identifier, unique within its project
    pub struct TeamId => "Team";
}

/// Storage key of a team: the team id scoped by its project id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamKey(String);

impl TeamKey {
    /// Compose the `pid:tid` key
    pub fn new(pid: &ProjectId, tid: &TeamId) -> Self {
        // ':' never appears in a valid id, so the pair cannot collide
        Self(format!("{}:{}", pid, tid))
    }
}

impl StorageKey for TeamKey {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// A team inside a project. Teams are seeded externally and read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    pid: ProjectId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    desc: Option<String>,
    #[serde(default)]
    chiefs: Vec<UserId>,
    #[serde(default)]
    members: Vec<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mailing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    headcount: Option<u32>,
    #[serde(default)]
    disabled: bool,
}

impl Team {
    /// Create a new team in project `pid`
    pub fn new(id: TeamId, pid: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            pid,
            name: name.into(),
            desc: None,
            chiefs: Vec::new(),
            members: Vec::new(),
            mailing: None,
            headcount: None,
            disabled: false,
        }
    }

    /// Set description (builder pattern)
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Set chiefs (builder pattern)
    pub fn with_chiefs(mut self, chiefs: Vec<UserId>) -> Self {
        self.chiefs = chiefs;
        self
    }

    /// Set members (builder pattern)
    pub fn with_members(mut self, members: Vec<UserId>) -> Self {
        self.members = members;
        self
    }

    /// Set the mailing list address (builder pattern)
    pub fn with_mailing(mut self, mailing: impl Into<String>) -> Self {
        self.mailing = Some(mailing.into());
        self
    }

    /// Set the planned headcount (builder pattern)
    pub fn with_headcount(mut self, headcount: u32) -> Self {
        self.headcount = Some(headcount);
        self
    }

    /// Mark the team as disabled (builder pattern)
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn pid(&self) -> &ProjectId {
        &self.pid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn chiefs(&self) -> &[UserId] {
        &self.chiefs
    }

    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    pub fn mailing(&self) -> Option<&str> {
        self.mailing.as_deref()
    }

    pub fn headcount(&self) -> Option<u32> {
        self.headcount
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Check if the team is scoped to `pid`
    pub fn belongs_to(&self, pid: &ProjectId) -> bool {
        &self.pid == pid
    }
}

impl StorageEntity for Team {
    type Key = TeamKey;

    fn key(&self) -> Self::Key {
        TeamKey::new(&self.pid, &self.id)
    }
}
