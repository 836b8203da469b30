//! Submission service
//!
//! Handles article submission and editing.

use chrono::Utc;
use tracing::{info, instrument, warn};
use validator::Validate;

use techdaily_core::entities::{Article, ArticlePatch, NewArticle};
use techdaily_core::error::DomainError;
use techdaily_core::value_objects::{ArticleId, UserId};

use crate::dto::{into_domain_error, EditArticleRequest, SubmitArticleRequest};

use super::admission::AdmissionController;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::sync::SyncCoordinator;

/// Submission service
pub struct SubmissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubmissionService<'a> {
    /// Create a new SubmissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a new article
    ///
    /// Links are validated before anything else so a malformed payload never
    /// consumes quota.
    #[instrument(skip(self, request))]
    pub async fn submit(
        &self,
        contributor_id: UserId,
        request: SubmitArticleRequest,
    ) -> ServiceResult<Article> {
        request.validate().map_err(|e| into_domain_error(&e))?;
        AdmissionController::validate_links([request.link.as_str(), request.image_url.as_str()])?;

        let contributor = self
            .ctx
            .user_directory()
            .find_by_id(contributor_id)
            .await?
            .ok_or(DomainError::InvalidUser(contributor_id))?;

        let admission_controller = AdmissionController::new(self.ctx);
        let admission = admission_controller.admit(&contributor).await?;

        let (md_content, shortened_link) = self.enrich(&request.link).await;
        let new_article = NewArticle {
            title: request.title,
            description: request.description,
            tag: request.tag,
            category: request.category,
            rank: request.rank,
            link: request.link,
            image_url: request.image_url,
            md_content,
            shortened_link,
            contributor_id,
            review_status: admission.review_status,
            submitted_at: Utc::now(),
        };

        let article = match self.ctx.article_repo().create(&new_article).await {
            Ok(article) => article,
            Err(e) => {
                admission_controller.refund(&contributor, &admission).await;
                return Err(e.into());
            }
        };

        info!(
            article_id = %article.id,
            contributor_id = %contributor_id,
            review_status = ?article.review_status,
            "Article submitted"
        );

        SyncCoordinator::new(self.ctx).project(&article, "submit").await;

        Ok(article)
    }

    /// Edit an article as its contributor or an administrator
    ///
    /// The article is re-read right before the change. A contributor edit
    /// sends the article back to review; an administrator edit publishes it.
    #[instrument(skip(self, request))]
    pub async fn edit(
        &self,
        article_id: ArticleId,
        editor_id: UserId,
        request: EditArticleRequest,
    ) -> ServiceResult<Article> {
        request.validate().map_err(|e| into_domain_error(&e))?;
        let patch = ArticlePatch::from(request);
        AdmissionController::validate_links(patch.links())?;

        let mut article = self
            .ctx
            .article_repo()
            .find_by_id(article_id)
            .await?
            .ok_or(DomainError::ArticleNotFound(article_id))?;

        let editor = self
            .ctx
            .user_directory()
            .find_by_id(editor_id)
            .await?
            .ok_or(DomainError::InvalidUser(editor_id))?;

        if !editor.may_edit(article.contributor_id) {
            return Err(DomainError::PermissionDenied(format!(
                "user {editor_id} may not edit article {article_id}"
            ))
            .into());
        }

        let link_changed = article.apply_edit(patch, editor.is_administrator, Utc::now());
        if link_changed {
            let (md_content, shortened_link) = self.enrich(&article.link).await;
            article.md_content = md_content;
            article.shortened_link = shortened_link;
        }

        let article = self
            .ctx
            .article_repo()
            .update(&article)
            .await?
            .ok_or(DomainError::ArticleNotFound(article_id))?;

        info!(
            article_id = %article_id,
            editor_id = %editor_id,
            review_status = ?article.review_status,
            link_changed,
            "Article edited"
        );

        SyncCoordinator::new(self.ctx).project(&article, "edit").await;

        Ok(article)
    }

    /// Fetch markdown and a short link; failures leave the field empty
    async fn enrich(&self, link: &str) -> (Option<String>, Option<String>) {
        let enricher = self.ctx.link_enricher();

        let md_content = enricher.markdown(link).await.unwrap_or_else(|e| {
            warn!(link, error = %e, "Markdown fetch failed");
            None
        });
        let shortened_link = enricher.shorten(link).await.unwrap_or_else(|e| {
            warn!(link, error = %e, "Link shortening failed");
            None
        });

        (md_content, shortened_link)
    }
}
