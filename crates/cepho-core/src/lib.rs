//! # cepho-core
//!
//! Foundation crate for the CEPHO insight validation engine.
//! Defines the insight/reference model, the closed confidence and
//! verification enumerations, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CephoConfig;
pub use errors::{CephoError, CephoResult, CitationError};
pub use models::{
    Challenge, ChallengeAspect, Citation, ConfidenceLevel, Insight, Reference, SourceType,
    ValidationResult, VerificationStatus,
};
