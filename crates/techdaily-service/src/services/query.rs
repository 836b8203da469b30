//! Engagement queries
//!
//! Read paths over the record store, plus the search index for clients.
//! None of these feed back into a write.

use tracing::instrument;

use techdaily_core::entities::{Article, SearchDocument, User};
use techdaily_core::error::DomainError;
use techdaily_core::traits::PageRequest;
use techdaily_core::value_objects::{ArticleId, UserId, VoteStatus};

use crate::dto::requests::MAX_SEARCH_LIMIT;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Query service
pub struct QueryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> QueryService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Users who starred an article, most recent first
    #[instrument(skip(self))]
    pub async fn starers(&self, article_id: ArticleId, page: PageRequest) -> ServiceResult<Vec<User>> {
        self.ctx
            .article_repo()
            .find_by_id(article_id)
            .await?
            .ok_or(DomainError::ArticleNotFound(article_id))?;

        let votes = self
            .ctx
            .vote_repo()
            .find_by_article(article_id, VoteStatus::Up, page)
            .await?;
        let ids: Vec<UserId> = votes.iter().map(|v| v.user_id).collect();

        Ok(self.ctx.user_directory().find_by_ids(&ids).await?)
    }

    /// Articles a user starred, most recent vote first
    #[instrument(skip(self))]
    pub async fn starred_articles(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> ServiceResult<Vec<Article>> {
        self.ctx
            .user_directory()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::InvalidUser(user_id))?;

        let votes = self
            .ctx
            .vote_repo()
            .find_by_user(user_id, VoteStatus::Up, page)
            .await?;
        let ids: Vec<ArticleId> = votes.iter().map(|v| v.article_id).collect();

        Ok(self.ctx.article_repo().find_by_ids(&ids).await?)
    }

    /// Articles submitted by a user, newest first
    #[instrument(skip(self))]
    pub async fn contributions(
        &self,
        contributor_id: UserId,
        page: PageRequest,
    ) -> ServiceResult<Vec<Article>> {
        Ok(self
            .ctx
            .article_repo()
            .find_by_contributor(contributor_id, page)
            .await?)
    }

    /// Stored markdown rendering of an article's link
    ///
    /// `None` when enrichment never produced one.
    #[instrument(skip(self))]
    pub async fn article_detail(&self, article_id: ArticleId) -> ServiceResult<Option<String>> {
        let article = self
            .ctx
            .article_repo()
            .find_by_id(article_id)
            .await?
            .ok_or(DomainError::ArticleNotFound(article_id))?;
        Ok(article.md_content)
    }

    /// Number of articles in the record store
    #[instrument(skip(self))]
    pub async fn article_totals(&self) -> ServiceResult<u64> {
        Ok(self.ctx.article_repo().count().await?)
    }

    /// Full-text search over the projected documents
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, limit: usize) -> ServiceResult<Vec<SearchDocument>> {
        Ok(self
            .ctx
            .search_index()
            .search(query, limit.clamp(1, MAX_SEARCH_LIMIT))
            .await?)
    }

    /// The indexed snapshot of one article
    #[instrument(skip(self))]
    pub async fn search_document(&self, article_id: ArticleId) -> ServiceResult<SearchDocument> {
        Ok(self
            .ctx
            .search_index()
            .get(article_id)
            .await?
            .ok_or(DomainError::ArticleNotFound(article_id))?)
    }
}
