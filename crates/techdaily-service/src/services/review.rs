//! Review service
//!
//! The publication gate. Only administrators decide, and may re-decide at
//! any time.

use chrono::Utc;
use tracing::{info, instrument};

use techdaily_core::entities::{Article, User};
use techdaily_core::error::DomainError;
use techdaily_core::traits::PageRequest;
use techdaily_core::value_objects::{ArticleId, ReviewStatus, UserId};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::sync::SyncCoordinator;

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require_administrator(&self, reviewer_id: UserId) -> ServiceResult<User> {
        let reviewer = self
            .ctx
            .user_directory()
            .find_by_id(reviewer_id)
            .await?
            .ok_or(DomainError::InvalidUser(reviewer_id))?;

        if !reviewer.is_administrator {
            return Err(DomainError::PermissionDenied(format!(
                "user {reviewer_id} is not an administrator"
            ))
            .into());
        }

        Ok(reviewer)
    }

    /// Approve or reject an article
    ///
    /// Only the review columns are written, on the row as currently stored.
    #[instrument(skip(self))]
    pub async fn decide(
        &self,
        reviewer_id: UserId,
        article_id: ArticleId,
        approve: bool,
    ) -> ServiceResult<Article> {
        self.require_administrator(reviewer_id).await?;

        let article = self
            .ctx
            .article_repo()
            .record_review(article_id, ReviewStatus::decided(approve), Utc::now())
            .await?
            .ok_or(DomainError::ArticleNotFound(article_id))?;

        info!(
            article_id = %article_id,
            reviewer_id = %reviewer_id,
            review_status = ?article.review_status,
            "Review decision recorded"
        );

        SyncCoordinator::new(self.ctx).project(&article, "review").await;

        Ok(article)
    }

    /// Articles in a review state, newest submission first
    #[instrument(skip(self))]
    pub async fn queue(
        &self,
        reviewer_id: UserId,
        status: ReviewStatus,
        page: PageRequest,
    ) -> ServiceResult<Vec<Article>> {
        self.require_administrator(reviewer_id).await?;

        Ok(self
            .ctx
            .article_repo()
            .find_by_review_status(status, page)
            .await?)
    }
}
