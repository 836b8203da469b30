//! Review status - the publication gate

use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication state of an article
///
/// Administrators may re-decide at any time, so there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i16", try_from = "i16")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    /// Storage code: pending=0, approved=1, rejected=-1
    #[inline]
    pub const fn code(self) -> i16 {
        match self {
            Self::Pending => 0,
            Self::Approved => 1,
            Self::Rejected => -1,
        }
    }

    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Pending),
            1 => Some(Self::Approved),
            -1 => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Status produced by a review decision
    #[inline]
    pub const fn decided(approve: bool) -> Self {
        if approve {
            Self::Approved
        } else {
            Self::Rejected
        }
    }

    /// Initial status for a new or edited article
    #[inline]
    pub const fn initial(by_administrator: bool) -> Self {
        if by_administrator {
            Self::Approved
        } else {
            Self::Pending
        }
    }

    #[inline]
    pub fn is_published(self) -> bool {
        self == Self::Approved
    }
}

impl From<ReviewStatus> for i16 {
    fn from(status: ReviewStatus) -> Self {
        status.code()
    }
}

impl TryFrom<i16> for ReviewStatus {
    type Error = String;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("invalid review status: {code}"))
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Approved => f.write_str("approved"),
            Self::Rejected => f.write_str("rejected"),
        }
    }
}
