//! Data transfer objects for the operations exposed to the transport layer
//!
//! - Request DTOs with validation for inputs
//! - Response DTOs for serializing outputs

pub mod requests;
pub mod responses;

pub use requests::{
    into_domain_error, EditArticleRequest, PageQuery, ReviewRequest, SearchRequest,
    SubmitArticleRequest, VoteRequest,
};
pub use responses::{DailyViewsResponse, StarerResponse, VoteResponse};
