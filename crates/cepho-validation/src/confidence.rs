//! Confidence derivation from reviewer status.

use cepho_core::models::{ConfidenceLevel, VerificationStatus};

/// Derive the confidence to display for an insight given its review status.
///
/// - `Disputed` / `Rejected` clamp to the lowest level.
/// - `Confirmed` keeps the stated level; it never elevates.
/// - `Unverified` / `Pending` keep the stated level, capped at `High`:
///   `Verified` requires a confirmed review.
pub fn derive_confidence(current: ConfidenceLevel, status: VerificationStatus) -> ConfidenceLevel {
    match status {
        VerificationStatus::Disputed | VerificationStatus::Rejected => ConfidenceLevel::lowest(),
        VerificationStatus::Confirmed => current,
        VerificationStatus::Unverified | VerificationStatus::Pending => {
            current.min(ConfidenceLevel::High)
        }
    }
}
