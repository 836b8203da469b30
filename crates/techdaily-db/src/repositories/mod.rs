//! Repository implementations
//!
//! PostgreSQL implementations of the record store ports defined in techdaily-core.

mod article;
mod comment;
mod error;
mod user;
mod vote;

pub use article::PgArticleRepository;
pub use comment::PgCommentRepository;
pub use user::PgUserDirectory;
pub use vote::PgVoteRepository;
