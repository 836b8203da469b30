//! User entity - the identity view this core consumes

use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Resolved user identity with its capability flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub nickname: String,
    pub is_administrator: bool,
}

impl User {
    /// Create a regular (non-administrator) user
    pub fn new(id: UserId, nickname: impl Into<String>) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            is_administrator: false,
        }
    }

    /// Create an administrator
    pub fn administrator(id: UserId, nickname: impl Into<String>) -> Self {
        Self {
            is_administrator: true,
            ..Self::new(id, nickname)
        }
    }

    /// Administrators and the contributor may edit an article
    #[inline]
    pub fn may_edit(&self, contributor_id: UserId) -> bool {
        self.is_administrator || self.id == contributor_id
    }
}
