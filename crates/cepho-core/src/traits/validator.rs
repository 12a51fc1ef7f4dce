use crate::models::{Insight, ValidationResult};

/// Insight validation: confidence, challenges, and citations.
pub trait IInsightValidator: Send + Sync {
    /// Validate an insight. Per-reference formatting failures are reported
    /// inside the result, never as an error.
    fn validate(&self, insight: &Insight) -> ValidationResult;
}
