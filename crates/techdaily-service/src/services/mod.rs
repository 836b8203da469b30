//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and implements one group
//! of operations. Writes go through [`SyncCoordinator`] for everything after
//! the record store commit.

pub mod admission;
pub mod article;
pub mod context;
pub mod error;
pub mod query;
pub mod review;
pub mod submission;
pub mod sync;
pub mod vote;

// Re-export all services for convenience
pub use admission::{Admission, AdmissionController};
pub use article::ArticleService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use query::QueryService;
pub use review::ReviewService;
pub use submission::SubmissionService;
pub use sync::SyncCoordinator;
pub use vote::VoteService;
