//! Vote entity <-> model mapper

use techdaily_core::entities::Vote;
use techdaily_core::error::DomainError;
use techdaily_core::value_objects::{ArticleId, UserId, VoteStatus};

use crate::models::VoteModel;

/// Convert VoteModel to Vote entity
impl TryFrom<VoteModel> for Vote {
    type Error = DomainError;

    fn try_from(model: VoteModel) -> Result<Self, Self::Error> {
        let status = VoteStatus::from_code(model.status).ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "vote ({}, {}) has unknown status {}",
                model.user_id, model.article_id, model.status
            ))
        })?;

        Ok(Vote {
            user_id: UserId::new(model.user_id),
            article_id: ArticleId::new(model.article_id),
            status,
            changed_at: model.changed_at,
        })
    }
}
