//! Article entity <-> model mapper

use techdaily_core::entities::{Article, NewArticle};
use techdaily_core::error::DomainError;
use techdaily_core::value_objects::{ArticleId, ReviewStatus, UserId};

use crate::models::ArticleModel;

/// Convert ArticleModel to Article entity
impl TryFrom<ArticleModel> for Article {
    type Error = DomainError;

    fn try_from(model: ArticleModel) -> Result<Self, Self::Error> {
        let review_status = ReviewStatus::from_code(model.review_status).ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "article {} has unknown review status {}",
                model.article_id, model.review_status
            ))
        })?;

        Ok(Article {
            id: ArticleId::new(model.article_id),
            title: model.title,
            description: model.description,
            tag: model.tag,
            category: model.category,
            rank: model.rank,
            link: model.link,
            image_url: model.image_url,
            md_content: model.md_content,
            shortened_link: model.shortened_link,
            contributor_id: UserId::new(model.contributor_id),
            review_status,
            stars: model.stars,
            un_stars: model.un_stars,
            views: model.views,
            submitted_at: model.submitted_at,
            reviewed_at: model.reviewed_at,
        })
    }
}

/// Values of a NewArticle prepared for database insertion
pub struct ArticleInsert<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub tag: Option<&'a str>,
    pub category: &'a str,
    pub rank: i32,
    pub link: &'a str,
    pub image_url: &'a str,
    pub md_content: Option<&'a str>,
    pub shortened_link: Option<&'a str>,
    pub contributor_id: i64,
    pub review_status: i16,
}

impl<'a> ArticleInsert<'a> {
    pub fn new(article: &'a NewArticle) -> Self {
        Self {
            title: &article.title,
            description: article.description.as_deref(),
            tag: article.tag.as_deref(),
            category: &article.category,
            rank: article.rank,
            link: &article.link,
            image_url: &article.image_url,
            md_content: article.md_content.as_deref(),
            shortened_link: article.shortened_link.as_deref(),
            contributor_id: article.contributor_id.into_inner(),
            review_status: article.review_status.code(),
        }
    }
}
