//! Domain entities - core business objects

mod article;
mod search_document;
mod user;
mod vote;

pub use article::{Article, ArticlePatch, NewArticle};
pub use search_document::{SearchDocument, SEARCH_PRIMARY_KEY};
pub use user::User;
pub use vote::Vote;
