//! Vote entity - one row per (user, article)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ArticleId, UserId, VoteStatus};

/// Stored vote of a user on an article
///
/// A missing row is equivalent to [`VoteStatus::Neutral`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub user_id: UserId,
    pub article_id: ArticleId,
    pub status: VoteStatus,
    pub changed_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(user_id: UserId, article_id: ArticleId, status: VoteStatus) -> Self {
        Self {
            user_id,
            article_id,
            status,
            changed_at: Utc::now(),
        }
    }

    /// Status of an optional row
    #[inline]
    pub fn status_of(vote: Option<&Vote>) -> VoteStatus {
        vote.map_or(VoteStatus::Neutral, |v| v.status)
    }
}
