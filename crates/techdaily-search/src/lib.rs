//! # techdaily-search
//!
//! Meilisearch implementation of the search index port.
//!
//! The index holds one [`SearchDocument`](techdaily_core::SearchDocument) per
//! article, keyed by `article_id`. It is a projection of the record store:
//! documents are written after the record store commits and are never read
//! back to make a business decision.

mod error;
mod index;
mod settings;

pub use error::{SearchClientError, SearchResult};
pub use index::MeiliSearchIndex;
pub use settings::{
    article_settings, FILTERABLE_ATTRIBUTES, SEARCHABLE_ATTRIBUTES, SORTABLE_ATTRIBUTES,
};
