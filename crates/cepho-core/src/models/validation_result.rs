use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Challenge, ChallengeAspect, Citation, ConfidenceLevel, VerificationStatus};
use crate::errors::CitationError;

/// Outcome of validating one insight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationResult {
    pub insight_id: String,
    /// blake3 digest of the content that was validated.
    pub content_hash: String,
    /// Never `Verified` unless `verification` is `Confirmed`.
    pub confidence: ConfidenceLevel,
    pub verification: VerificationStatus,
    /// In aspect priority order.
    pub challenges: Vec<Challenge>,
    /// In reference order, numbered consecutively.
    pub citations: Vec<Citation>,
    /// References that could not be formatted.
    pub skipped: Vec<SkippedReference>,
    pub review_flag: Option<ReviewFlag>,
}

impl ValidationResult {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn has_challenge(&self, aspect: ChallengeAspect) -> bool {
        self.challenges.iter().any(|c| c.aspect == aspect)
    }

    pub fn needs_review(&self) -> bool {
        self.review_flag.is_some()
    }
}

/// A reference excluded from the citation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SkippedReference {
    pub reference_id: String,
    pub error: CitationError,
}

impl From<CitationError> for SkippedReference {
    fn from(error: CitationError) -> Self {
        Self {
            reference_id: error.reference_id().to_string(),
            error,
        }
    }
}

/// Marks a result that a human reviewer should look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReviewFlag {
    pub severity: ReviewSeverity,
    pub reasons: Vec<String>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSeverity {
    /// Thin evidence.
    Low,
    /// Low confidence or unusable references.
    Medium,
    /// A reviewer already disputed or rejected the insight.
    High,
}
