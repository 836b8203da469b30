//! Index settings for the article index

use meilisearch_sdk::settings::Settings;

/// Fields matched by full-text queries, in ranking order
pub const SEARCHABLE_ATTRIBUTES: [&str; 4] = ["title", "description", "tag", "category"];
pub const FILTERABLE_ATTRIBUTES: [&str; 3] = ["review_status", "category", "contributor_id"];
pub const SORTABLE_ATTRIBUTES: [&str; 3] = ["stars", "views", "submitted_at"];

/// Settings applied to the article index at setup time
pub fn article_settings() -> Settings {
    Settings::new()
        .with_ranking_rules([
            "words",
            "typo",
            "proximity",
            "attribute",
            "sort",
            "exactness",
        ])
        .with_searchable_attributes(SEARCHABLE_ATTRIBUTES)
        .with_filterable_attributes(FILTERABLE_ATTRIBUTES)
        .with_sortable_attributes(SORTABLE_ATTRIBUTES)
}
