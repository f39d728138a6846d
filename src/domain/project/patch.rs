use serde::Serialize;

/// Normalized partial update for a project.
///
/// `None` means "leave unchanged". `action_date` is already epoch seconds here;
/// textual input is converted before a patch is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
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

impl ProjectPatch {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
