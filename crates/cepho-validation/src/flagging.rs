//! Flag results for human review when the engine cannot vouch for them.

use cepho_core::models::{
    ChallengeAspect, ConfidenceLevel, ReviewFlag, ReviewSeverity, ValidationResult,
};

/// Create a review flag for a validation result, if one is warranted.
///
/// Reasons are listed in a fixed order; severity is the highest among them.
pub fn flag_for_review(result: &ValidationResult) -> Option<ReviewFlag> {
    let mut reasons = Vec::new();
    let mut severity = None;

    let mut raise = |level: ReviewSeverity, reason: String| {
        reasons.push(reason);
        severity = severity.max(Some(level));
    };

    if result.verification.is_adverse() {
        raise(
            ReviewSeverity::High,
            format!("reviewer marked insight {}", result.verification),
        );
    } else if result.confidence == ConfidenceLevel::Low {
        raise(ReviewSeverity::Medium, "low confidence".to_string());
    }

    if !result.skipped.is_empty() {
        raise(
            ReviewSeverity::Medium,
            format!("{} reference(s) could not be cited", result.skipped.len()),
        );
    }

    if result.has_challenge(ChallengeAspect::MissingEvidence) {
        raise(ReviewSeverity::Low, "no supporting evidence".to_string());
    }

    severity.map(|severity| ReviewFlag { severity, reasons })
}
