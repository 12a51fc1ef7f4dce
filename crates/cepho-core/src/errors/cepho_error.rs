use super::{CitationError, ConfigError};
use crate::models::VerificationStatus;

/// Top-level error for the insight validation engine.
#[derive(Debug, thiserror::Error)]
pub enum CephoError {
    /// A persisted or caller-supplied enum string did not name a known variant.
    /// Returned instead of falling back to a default variant.
    #[error("unknown {kind} value: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("invalid verification transition: {from} -> {to}")]
    InvalidTransition {
        from: VerificationStatus,
        to: VerificationStatus,
    },

    #[error("citation error: {0}")]
    CitationError(#[from] CitationError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

pub type CephoResult<T> = Result<T, CephoError>;
