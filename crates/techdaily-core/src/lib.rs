//! # techdaily-core
//!
//! Domain layer containing entities, value objects, the vote and review state
//! machines, and the traits (ports) every collaborator has to implement.
//! This crate has zero dependencies on infrastructure (database, cache, search engine).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Article, ArticlePatch, NewArticle, SearchDocument, User, Vote, SEARCH_PRIMARY_KEY,
};
pub use error::{DomainError, ErrorKind};
pub use traits::{
    ArticleRepository, CommentRepository, DailyViewCounter, LinkEnricher, PageRequest,
    PassthroughEnricher, QuotaDecision, RepoResult, SearchIndex, SubmissionQuotaStore,
    UserDirectory, VoteApplied, VoteRepository,
};
pub use value_objects::{ArticleId, ReviewStatus, UserId, VoteAction, VoteStatus, VoteTransition};
