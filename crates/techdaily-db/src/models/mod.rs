//! Database models - SQLx-compatible structs for PostgreSQL tables

mod article;
mod user;
mod vote;

pub(crate) use article::ARTICLE_COLUMNS;
pub use article::ArticleModel;
pub use user::{UserModel, ADMIN_STATUS};
pub use vote::VoteModel;
