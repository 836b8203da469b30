//! # techdaily-service
//!
//! Application layer: the operations the transport layer calls, the
//! submission admission controller and the consistency coordinator that
//! sequences every write across the record store, the cache and the search
//! index.

pub mod bootstrap;
pub mod dto;
pub mod services;

pub use bootstrap::{build_context, BootstrapError, Infrastructure};
pub use services::{
    AdmissionController, ArticleService, QueryService, ReviewService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SubmissionService, SyncCoordinator,
    VoteService,
};
