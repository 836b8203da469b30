//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate`. Failed URL rules
//! surface as `InvalidLink`, every other rule as `ValidationError`.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use techdaily_core::entities::ArticlePatch;
use techdaily_core::error::DomainError;
use techdaily_core::traits::PageRequest;
use techdaily_core::value_objects::VoteAction;

/// Upper bound on search hits per query
pub const MAX_SEARCH_LIMIT: usize = 100;

/// Convert validator output into the domain error taxonomy
pub fn into_domain_error(errors: &ValidationErrors) -> DomainError {
    let field_errors = errors.field_errors();
    let mut bad_links = field_errors
        .iter()
        .filter(|(_, errs)| errs.iter().any(|e| e.code == "url"))
        .map(|(field, _)| field.to_string())
        .collect::<Vec<_>>();

    if bad_links.is_empty() {
        DomainError::ValidationError(errors.to_string())
    } else {
        bad_links.sort();
        DomainError::InvalidLink(bad_links.join(", "))
    }
}

// ============================================================================
// Article Requests
// ============================================================================

/// Submit article request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitArticleRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub tag: Option<String>,

    #[validate(length(min = 1, max = 64, message = "Category must be 1-64 characters"))]
    pub category: String,

    #[serde(default)]
    pub rank: i32,

    #[validate(url(message = "Link must be an absolute URL"))]
    pub link: String,

    #[validate(url(message = "Image URL must be an absolute URL"))]
    pub image_url: String,
}

/// Edit article request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EditArticleRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub tag: Option<String>,

    #[validate(length(min = 1, max = 64, message = "Category must be 1-64 characters"))]
    pub category: Option<String>,

    pub rank: Option<i32>,

    #[validate(url(message = "Link must be an absolute URL"))]
    pub link: Option<String>,

    #[validate(url(message = "Image URL must be an absolute URL"))]
    pub image_url: Option<String>,
}

impl From<EditArticleRequest> for ArticlePatch {
    fn from(request: EditArticleRequest) -> Self {
        ArticlePatch {
            title: request.title,
            description: request.description,
            tag: request.tag,
            category: request.category,
            rank: request.rank,
            link: request.link,
            image_url: request.image_url,
        }
    }
}

// ============================================================================
// Engagement Requests
// ============================================================================

/// Vote request
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VoteRequest {
    pub action: VoteAction,
}

/// Review decision request
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReviewRequest {
    pub approve: bool,
}

/// Page selector for listing queries
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        let default = PageRequest::default();
        PageRequest::new(
            query.page.unwrap_or(default.page),
            query.size.unwrap_or(default.size),
        )
    }
}

/// Full-text search request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1, max = 256, message = "Query must be 1-256 characters"))]
    pub query: String,

    #[validate(range(min = 1, max = 100, message = "Limit must be 1-100"))]
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(20).clamp(1, MAX_SEARCH_LIMIT)
    }
}
