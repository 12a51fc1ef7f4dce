use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Weak point a challenge question targets.
///
/// Declaration order is evaluation priority.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeAspect {
    MissingEvidence,
    UnstatedAssumption,
    AlternativeExplanation,
    ScopeBoundary,
}

impl ChallengeAspect {
    /// Every aspect in evaluation order.
    pub const PRIORITY: [ChallengeAspect; 4] = [
        ChallengeAspect::MissingEvidence,
        ChallengeAspect::UnstatedAssumption,
        ChallengeAspect::AlternativeExplanation,
        ChallengeAspect::ScopeBoundary,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ChallengeAspect::MissingEvidence => "missing_evidence",
            ChallengeAspect::UnstatedAssumption => "unstated_assumption",
            ChallengeAspect::AlternativeExplanation => "alternative_explanation",
            ChallengeAspect::ScopeBoundary => "scope_boundary",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ChallengeAspect::MissingEvidence => "Evidence",
            ChallengeAspect::UnstatedAssumption => "Assumption",
            ChallengeAspect::AlternativeExplanation => "Alternative",
            ChallengeAspect::ScopeBoundary => "Scope",
        }
    }
}

impl fmt::Display for ChallengeAspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated question probing a weakness in an insight. Ephemeral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Challenge {
    pub aspect: ChallengeAspect,
    pub question: String,
    /// Phrase in the insight that tripped the heuristic, lowercased.
    pub trigger: Option<String>,
}
