//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ArticleId, UserId};

/// Error taxonomy used by callers to decide how to react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    RateLimited,
    InvalidInput,
    DependencyFailure,
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Article not found: {0}")]
    ArticleNotFound(ArticleId),

    #[error("Invalid user: {0}")]
    InvalidUser(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid link: {0}")]
    InvalidLink(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // =========================================================================
    // Rate Limiting
    // =========================================================================
    #[error("Submission limit exceeded for user {contributor}: {limit} per day")]
    SubmissionLimitExceeded { contributor: UserId, limit: u32 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Search index error: {0}")]
    SearchError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ArticleNotFound(_) => "NO_FIND_ARTICLE",
            Self::InvalidUser(_) => "INVALID_USER",
            Self::InvalidLink(_) => "UPLOAD_LINK_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::SubmissionLimitExceeded { .. } => "UPLOAD_LIMIT",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::SearchError(_) => "SEARCH_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Classify into the error taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ArticleNotFound(_) | Self::InvalidUser(_) => ErrorKind::NotFound,
            Self::InvalidLink(_) | Self::ValidationError(_) => ErrorKind::InvalidInput,
            Self::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Self::SubmissionLimitExceeded { .. } => ErrorKind::RateLimited,
            Self::DatabaseError(_)
            | Self::CacheError(_)
            | Self::SearchError(_)
            | Self::InternalError(_) => ErrorKind::DependencyFailure,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        self.kind() == ErrorKind::PermissionDenied
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limited(&self) -> bool {
        self.kind() == ErrorKind::RateLimited
    }

    /// Check if a collaborator failed
    pub fn is_dependency(&self) -> bool {
        self.kind() == ErrorKind::DependencyFailure
    }
}
