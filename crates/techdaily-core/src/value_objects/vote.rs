//! Vote state machine
//!
//! A user's stance on an article is one of three states. Every request moves
//! the stance through a fixed transition table; the counter deltas depend only
//! on the `(current, requested)` pair, never on the article's present counts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored stance of one user on one article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i16", try_from = "i16")]
pub enum VoteStatus {
    /// No stance (also what a missing vote row means)
    #[default]
    Neutral,
    /// Starred
    Up,
    /// Un-starred (counter-vote)
    Down,
}

impl VoteStatus {
    /// Wire/storage code: neutral=0, up=1, down=2
    #[inline]
    pub const fn code(self) -> i16 {
        match self {
            Self::Neutral => 0,
            Self::Up => 1,
            Self::Down => 2,
        }
    }

    /// Parse a storage code
    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Neutral),
            1 => Some(Self::Up),
            2 => Some(Self::Down),
            _ => None,
        }
    }

    /// Contribution of this stance to `stars - un_stars`
    #[inline]
    pub const fn score(self) -> i64 {
        match self {
            Self::Neutral => 0,
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self.code() as usize
    }
}

impl From<VoteStatus> for i16 {
    fn from(status: VoteStatus) -> Self {
        status.code()
    }
}

impl TryFrom<i16> for VoteStatus {
    type Error = String;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("invalid vote status: {code}"))
    }
}

impl fmt::Display for VoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => f.write_str("neutral"),
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
        }
    }
}

/// Requested vote action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteAction {
    Up,
    Down,
    Clear,
}

impl VoteAction {
    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Clear => 2,
        }
    }
}

impl fmt::Display for VoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
            Self::Clear => f.write_str("clear"),
        }
    }
}

/// (next status, Δstars, Δun_stars)
type Row = (VoteStatus, i64, i64);

/// Indexed by `[current][requested]`, requested in order up, down, clear.
const TRANSITIONS: [[Row; 3]; 3] = [
    // neutral
    [
        (VoteStatus::Up, 1, 0),
        (VoteStatus::Down, 0, 1),
        (VoteStatus::Neutral, 0, 0),
    ],
    // up
    [
        (VoteStatus::Up, 0, 0),
        (VoteStatus::Down, -1, 1),
        (VoteStatus::Neutral, -1, 0),
    ],
    // down
    [
        (VoteStatus::Up, 1, -1),
        (VoteStatus::Down, 0, 0),
        (VoteStatus::Neutral, 0, -1),
    ],
];

/// Result of applying a vote action to a stored status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    pub previous: VoteStatus,
    pub next: VoteStatus,
    pub star_delta: i64,
    pub un_star_delta: i64,
}

impl VoteTransition {
    /// Look up the transition for a `(current, requested)` pair
    pub const fn compute(current: VoteStatus, action: VoteAction) -> Self {
        let (next, star_delta, un_star_delta) = TRANSITIONS[current.index()][action.index()];
        Self {
            previous: current,
            next,
            star_delta,
            un_star_delta,
        }
    }

    /// True when nothing changes (idempotent repeat or clearing a neutral stance)
    #[inline]
    pub const fn is_noop(&self) -> bool {
        self.star_delta == 0 && self.un_star_delta == 0
    }

    /// True when the stored vote row has to be written
    #[inline]
    pub fn changes_status(&self) -> bool {
        self.previous != self.next
    }

    /// Human-readable outcome label
    pub const fn label(&self) -> &'static str {
        match (self.previous, self.next) {
            (VoteStatus::Neutral, VoteStatus::Up) => "Starred",
            (VoteStatus::Neutral, VoteStatus::Down) => "Un-starred",
            (VoteStatus::Up, VoteStatus::Neutral) => "Star removed",
            (VoteStatus::Down, VoteStatus::Neutral) => "Un-star removed",
            (VoteStatus::Up, VoteStatus::Down) => "Switched to un-star",
            (VoteStatus::Down, VoteStatus::Up) => "Switched to star",
            _ => "Unchanged",
        }
    }
}
