//! Model to entity mappers
//!
//! Rows carry raw status codes; converting them into domain entities is
//! fallible, so the mappers implement `TryFrom<Model>` and report unknown codes
//! as database errors.

mod article;
mod user;
mod vote;

pub use article::ArticleInsert;
