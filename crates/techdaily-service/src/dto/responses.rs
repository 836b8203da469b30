//! Response DTOs
//!
//! All response DTOs implement `Serialize`.

use serde::Serialize;

use techdaily_core::entities::User;
use techdaily_core::traits::VoteApplied;
use techdaily_core::value_objects::{ArticleId, UserId, VoteStatus};

/// Result of a vote request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteResponse {
    pub article_id: ArticleId,
    pub status: VoteStatus,
    pub label: &'static str,
    pub stars: i64,
    pub un_stars: i64,
}

impl From<&VoteApplied> for VoteResponse {
    fn from(applied: &VoteApplied) -> Self {
        Self {
            article_id: applied.article.id,
            status: applied.transition.next,
            label: applied.transition.label(),
            stars: applied.article.stars,
            un_stars: applied.article.un_stars,
        }
    }
}

/// A user who starred an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarerResponse {
    pub user_id: UserId,
    pub nickname: String,
}

impl From<User> for StarerResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            nickname: user.nickname,
        }
    }
}

/// Daily view total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyViewsResponse {
    pub total: u64,
}
