//! Submission admission controller
//!
//! Decides whether a submission may proceed and with which review status.
//! Administrators bypass the quota and are published immediately; everyone
//! else takes one slot of the daily quota, reserved atomically in the cache.

use tracing::{debug, info, instrument, warn};
use validator::ValidateUrl;

use techdaily_core::entities::User;
use techdaily_core::error::DomainError;
use techdaily_core::traits::QuotaDecision;
use techdaily_core::value_objects::ReviewStatus;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::sync::SyncCoordinator;

/// Outcome of a successful admission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    pub review_status: ReviewStatus,
    holds_quota_slot: bool,
}

impl Admission {
    /// True when a quota slot was reserved for this submission
    #[inline]
    pub fn holds_quota_slot(&self) -> bool {
        self.holds_quota_slot
    }
}

/// Submission admission controller
pub struct AdmissionController<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdmissionController<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reject anything that is not an absolute URL
    pub fn validate_links<'l>(links: impl IntoIterator<Item = &'l str>) -> Result<(), DomainError> {
        for link in links {
            if !link.validate_url() {
                return Err(DomainError::InvalidLink(link.to_string()));
            }
        }
        Ok(())
    }

    /// Admit a submission from a resolved contributor
    ///
    /// A cache outage admits the submission without consuming quota.
    #[instrument(skip(self, contributor), fields(contributor_id = %contributor.id))]
    pub async fn admit(&self, contributor: &User) -> ServiceResult<Admission> {
        if contributor.is_administrator {
            info!("Administrator submission admitted without quota");
            return Ok(Admission {
                review_status: ReviewStatus::initial(true),
                holds_quota_slot: false,
            });
        }

        let limit = self.ctx.policy().submission_daily_limit;
        match self.ctx.quota_store().try_reserve(contributor.id, limit).await {
            Ok(QuotaDecision::Reserved { used }) => {
                debug!(used, limit, "Quota slot reserved");
                Ok(Admission {
                    review_status: ReviewStatus::initial(false),
                    holds_quota_slot: true,
                })
            }
            Ok(QuotaDecision::Exhausted { used }) => {
                info!(used, limit, "Submission rejected: daily limit reached");
                Err(DomainError::SubmissionLimitExceeded {
                    contributor: contributor.id,
                    limit,
                }
                .into())
            }
            Err(e) => {
                warn!(error = %e, "Quota store unavailable; admitting without quota");
                Ok(Admission {
                    review_status: ReviewStatus::initial(false),
                    holds_quota_slot: false,
                })
            }
        }
    }

    /// Undo the quota side of an admission whose insert failed
    pub async fn refund(&self, contributor: &User, admission: &Admission) {
        if admission.holds_quota_slot {
            SyncCoordinator::new(self.ctx)
                .refund_quota(contributor.id)
                .await;
        }
    }
}
