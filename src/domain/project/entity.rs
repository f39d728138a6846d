//! Project entity

use serde::{Deserialize, Serialize};

use super::patch::ProjectPatch;
use crate::domain::id::define_entity_id;
use crate::domain::storage::StorageEntity;
use crate::domain::user::UserId;

define_entity_id! {
    /// Project identifier
    pub struct ProjectId => "Project";
}

/// Project document as persisted.
///
/// The identifier is stored under `_id`; response schemas expose it as `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    id: ProjectId,
    name: String,
    #[serde(default)]
    desc: String,
    /// Users allowed to see full detail and to edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owners: Option<Vec<UserId>>,
    /// Epoch seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    calendar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shared_drive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mailing_staff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mailing_leader: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mattermost_ch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gitlab_project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    volunteer_certificate_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    traffic_fee_doc: Option<String>,
}

impl Project {
    /// Create a new project with no owners
    pub fn new(id: ProjectId, name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            desc: desc.into(),
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
        }
    }

    /// Set owners (builder pattern)
    pub fn with_owners(mut self, owners: Vec<UserId>) -> Self {
        self.owners = Some(owners);
        self
    }

    /// Set the event date in epoch seconds (builder pattern)
    pub fn with_action_date(mut self, action_date: i64) -> Self {
        self.action_date = Some(action_date);
        self
    }

    // Getters

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// `None` when the document has no owners field
    pub fn owners(&self) -> Option<&[UserId]> {
        self.owners.as_deref()
    }

    pub fn action_date(&self) -> Option<i64> {
        self.action_date
    }

    pub fn calendar(&self) -> Option<&str> {
        self.calendar.as_deref()
    }

    pub fn shared_drive(&self) -> Option<&str> {
        self.shared_drive.as_deref()
    }

    pub fn mailing_staff(&self) -> Option<&str> {
        self.mailing_staff.as_deref()
    }

    pub fn mailing_leader(&self) -> Option<&str> {
        self.mailing_leader.as_deref()
    }

    pub fn mattermost_ch_id(&self) -> Option<&str> {
        self.mattermost_ch_id.as_deref()
    }

    pub fn gitlab_project_id(&self) -> Option<&str> {
        self.gitlab_project_id.as_deref()
    }

    pub fn volunteer_certificate_hours(&self) -> Option<u32> {
        self.volunteer_certificate_hours
    }

    pub fn traffic_fee_doc(&self) -> Option<&str> {
        self.traffic_fee_doc.as_deref()
    }

    /// True only when an owner list exists and contains `uid`
    pub fn is_owned_by(&self, uid: &UserId) -> bool {
        self.owners
            .as_ref()
            .is_some_and(|owners| owners.contains(uid))
    }

    /// Merge a partial update: present fields override, absent fields are kept
    pub fn apply(&mut self, patch: &ProjectPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(desc) = &patch.desc {
            self.desc = desc.clone();
        }
        if let Some(action_date) = patch.action_date {
            self.action_date = Some(action_date);
        }
        if let Some(calendar) = &patch.calendar {
            self.calendar = Some(calendar.clone());
        }
        if let Some(shared_drive) = &patch.shared_drive {
            self.shared_drive = Some(shared_drive.clone());
        }
        if let Some(mailing_staff) = &patch.mailing_staff {
            self.mailing_staff = Some(mailing_staff.clone());
        }
        if let Some(mailing_leader) = &patch.mailing_leader {
            self.mailing_leader = Some(mailing_leader.clone());
        }
        if let Some(ch_id) = &patch.mattermost_ch_id {
            self.mattermost_ch_id = Some(ch_id.clone());
        }
        if let Some(gitlab_id) = &patch.gitlab_project_id {
            self.gitlab_project_id = Some(gitlab_id.clone());
        }
        if let Some(hours) = patch.volunteer_certificate_hours {
            self.volunteer_certificate_hours = Some(hours);
        }
        if let Some(doc) = &patch.traffic_fee_doc {
            self.traffic_fee_doc = Some(doc.clone());
        }
    }
}

impl StorageEntity for Project {
    type Key = ProjectId;

    fn key(&self) -> Self::Key {
        self.id.clone()
    }
}
