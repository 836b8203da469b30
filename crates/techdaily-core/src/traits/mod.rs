//! Ports - traits implemented by the infrastructure crates

mod repositories;
mod stores;

pub use repositories::{
    ArticleRepository, CommentRepository, PageRequest, RepoResult, UserDirectory, VoteApplied,
    VoteRepository,
};
pub use stores::{
    DailyViewCounter, LinkEnricher, PassthroughEnricher, QuotaDecision, SearchIndex,
    SubmissionQuotaStore,
};
