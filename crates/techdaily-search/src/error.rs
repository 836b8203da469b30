//! Search client errors

use meilisearch_sdk::errors::{Error as MeiliError, ErrorCode, MeilisearchError};
use techdaily_core::error::DomainError;

/// Error type for search index operations
#[derive(Debug, thiserror::Error)]
pub enum SearchClientError {
    #[error("Failed to create search client: {0}")]
    CreateClient(String),

    #[error("Search engine error: {0}")]
    Engine(#[from] MeiliError),
}

/// Result type for search index operations
pub type SearchResult<T> = Result<T, SearchClientError>;

impl SearchClientError {
    /// True when the engine reported that the document does not exist
    pub fn is_document_not_found(&self) -> bool {
        matches!(
            self,
            Self::Engine(MeiliError::Meilisearch(MeilisearchError {
                error_code: ErrorCode::DocumentNotFound,
                ..
            }))
        )
    }
}

impl From<SearchClientError> for DomainError {
    fn from(err: SearchClientError) -> Self {
        DomainError::SearchError(err.to_string())
    }
}
