use serde::{Deserialize, Serialize};

use super::defaults;

/// Validation engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Well-formed references needed before the missing-evidence
    /// challenge is suppressed.
    pub min_supporting_references: usize,
    /// Attach a review flag to results that need human attention.
    pub flag_for_review: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_supporting_references: defaults::DEFAULT_MIN_SUPPORTING_REFERENCES,
            flag_for_review: defaults::DEFAULT_FLAG_FOR_REVIEW,
        }
    }
}
