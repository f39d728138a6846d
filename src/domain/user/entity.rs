//! Caller identity types

use serde::{Deserialize, Serialize};

use crate::domain::id::define_entity_id;

define_entity_id! {
    /// User identifier as carried in owner lists and token subjects
    pub struct UserId => "User";
}

/// Identity of the caller of a single request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub uid: UserId,
}

impl CurrentUser {
    /// Wrap an authenticated uid
    pub fn new(uid: UserId) -> Self {
        Self { uid }
    }

    pub fn uid(&self) -> &UserId {
        &self.uid
    }
}
