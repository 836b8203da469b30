//! Article service
//!
//! Deletion with its cascade, view counting and the daily view total.

use tracing::{info, instrument};

use techdaily_core::entities::Article;
use techdaily_core::error::DomainError;
use techdaily_core::value_objects::ArticleId;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::sync::SyncCoordinator;

/// Article service
pub struct ArticleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ArticleService<'a> {
    /// Create a new ArticleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Delete an article and everything hanging off it
    ///
    /// Votes, then comments, then the search document, then the article row.
    #[instrument(skip(self))]
    pub async fn delete(&self, article_id: ArticleId) -> ServiceResult<()> {
        self.ctx
            .article_repo()
            .find_by_id(article_id)
            .await?
            .ok_or(DomainError::ArticleNotFound(article_id))?;

        let votes = self.ctx.vote_repo().delete_by_article(article_id).await?;
        let comments = self.ctx.comment_repo().delete_by_article(article_id).await?;
        SyncCoordinator::new(self.ctx).retract(article_id).await;

        if !self.ctx.article_repo().delete(article_id).await? {
            return Err(DomainError::ArticleNotFound(article_id).into());
        }

        info!(article_id = %article_id, votes, comments, "Article deleted");
        Ok(())
    }

    /// Count one view of an article
    #[instrument(skip(self))]
    pub async fn record_view(&self, article_id: ArticleId) -> ServiceResult<Article> {
        let article = self
            .ctx
            .article_repo()
            .increment_views(article_id)
            .await?
            .ok_or(DomainError::ArticleNotFound(article_id))?;

        let sync = SyncCoordinator::new(self.ctx);
        sync.count_daily_view(article_id).await;
        sync.project(&article, "view").await;

        Ok(article)
    }

    /// Views across all articles today
    #[instrument(skip(self))]
    pub async fn daily_total_views(&self) -> ServiceResult<u64> {
        Ok(self.ctx.view_counter().total().await?)
    }
}
