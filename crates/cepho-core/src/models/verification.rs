//! Reviewer-assigned verification status and its state machine.
//!
//! ```text
//! unverified ──► pending ──► confirmed ─┐
//!                  ▲   ├───► disputed ──┤
//!                  │   └───► rejected ──┤
//!                  └────────────────────┘  (re-review / reopen)
//! ```
//!
//! Every transition is triggered by a human reviewer. Nothing in the engine
//! moves an insight between states on its own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::{CephoError, CephoResult};

/// Outcome of human review for an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// No reviewer has looked at the insight yet.
    #[default]
    Unverified,
    /// Submitted for review, or reopened.
    Pending,
    Confirmed,
    Disputed,
    Rejected,
}

impl VerificationStatus {
    pub const ALL: [VerificationStatus; 5] = [
        VerificationStatus::Unverified,
        VerificationStatus::Pending,
        VerificationStatus::Confirmed,
        VerificationStatus::Disputed,
        VerificationStatus::Rejected,
    ];

    /// Whether a reviewer may move an insight from `self` to `next`.
    pub fn can_transition_to(self, next: VerificationStatus) -> bool {
        use VerificationStatus::*;
        match (self, next) {
            (Unverified, Pending) => true,
            (Pending, Confirmed | Disputed | Rejected) => true,
            (Disputed | Rejected, Pending) => true,
            (Confirmed, Pending) => true,
            (Unverified | Pending | Confirmed | Disputed | Rejected, _) => false,
        }
    }

    /// Apply a reviewer transition, rejecting illegal moves.
    pub fn transition(self, next: VerificationStatus) -> CephoResult<VerificationStatus> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CephoError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    /// Whether the review reached a negative outcome.
    pub const fn is_adverse(self) -> bool {
        matches!(self, VerificationStatus::Disputed | VerificationStatus::Rejected)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            VerificationStatus::Unverified => "unverified",
            VerificationStatus::Pending => "pending",
            VerificationStatus::Confirmed => "confirmed",
            VerificationStatus::Disputed => "disputed",
            VerificationStatus::Rejected => "rejected",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            VerificationStatus::Unverified => "Unverified",
            VerificationStatus::Pending => "Pending review",
            VerificationStatus::Confirmed => "Confirmed",
            VerificationStatus::Disputed => "Disputed",
            VerificationStatus::Rejected => "Rejected",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            VerificationStatus::Unverified => "badge-status-unverified",
            VerificationStatus::Pending => "badge-status-pending",
            VerificationStatus::Confirmed => "badge-status-confirmed",
            VerificationStatus::Disputed => "badge-status-disputed",
            VerificationStatus::Rejected => "badge-status-rejected",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = CephoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unverified" => Ok(VerificationStatus::Unverified),
            "pending" => Ok(VerificationStatus::Pending),
            "confirmed" => Ok(VerificationStatus::Confirmed),
            "disputed" => Ok(VerificationStatus::Disputed),
            "rejected" => Ok(VerificationStatus::Rejected),
            _ => Err(CephoError::UnknownVariant {
                kind: "verification status",
                value: s.to_string(),
            }),
        }
    }
}
