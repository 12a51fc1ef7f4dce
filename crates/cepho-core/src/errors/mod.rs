//! Error handling for CEPHO.
//! One error enum per subsystem, `thiserror` only.

pub mod cepho_error;
pub mod citation_error;
pub mod config_error;

pub use cepho_error::{CephoError, CephoResult};
pub use citation_error::CitationError;
pub use config_error::ConfigError;
