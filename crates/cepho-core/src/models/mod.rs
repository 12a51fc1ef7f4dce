pub mod challenge;
pub mod citation;
pub mod confidence;
pub mod insight;
pub mod reference;
pub mod validation_result;
pub mod verification;

pub use challenge::{Challenge, ChallengeAspect};
pub use citation::{Citation, ClaimSpan};
pub use confidence::ConfidenceLevel;
pub use insight::{Insight, ReviewRecord};
pub use reference::{Reference, ReferenceField, SourceType};
pub use validation_result::{ReviewFlag, ReviewSeverity, SkippedReference, ValidationResult};
pub use verification::VerificationStatus;
