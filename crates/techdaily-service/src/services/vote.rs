//! Vote service
//!
//! Applies the vote state machine through the record store's atomic apply and
//! projects the resulting article.

use tracing::{info, instrument};

use techdaily_core::entities::Vote;
use techdaily_core::error::DomainError;
use techdaily_core::value_objects::{ArticleId, UserId, VoteAction, VoteStatus};

use crate::dto::VoteResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::sync::SyncCoordinator;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a vote action of `user_id` on `article_id`
    #[instrument(skip(self))]
    pub async fn vote(
        &self,
        article_id: ArticleId,
        user_id: UserId,
        action: VoteAction,
    ) -> ServiceResult<VoteResponse> {
        let applied = self
            .ctx
            .vote_repo()
            .apply(article_id, user_id, action)
            .await?
            .ok_or(DomainError::ArticleNotFound(article_id))?;

        info!(
            article_id = %article_id,
            user_id = %user_id,
            outcome = applied.transition.label(),
            stars = applied.article.stars,
            un_stars = applied.article.un_stars,
            "Vote applied"
        );

        SyncCoordinator::new(self.ctx)
            .project(&applied.article, "vote")
            .await;

        Ok(VoteResponse::from(&applied))
    }

    /// Current stance of a user on an article; a missing row is neutral
    #[instrument(skip(self))]
    pub async fn vote_status(
        &self,
        user_id: UserId,
        article_id: ArticleId,
    ) -> ServiceResult<VoteStatus> {
        let vote = self.ctx.vote_repo().find(user_id, article_id).await?;
        Ok(Vote::status_of(vote.as_ref()))
    }
}
