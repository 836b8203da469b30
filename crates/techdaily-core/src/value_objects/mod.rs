//! Value objects - immutable types that represent domain concepts

mod ids;
mod review;
mod vote;

pub use ids::{ArticleId, IdParseError, UserId};
pub use review::ReviewStatus;
pub use vote::{VoteAction, VoteStatus, VoteTransition};
