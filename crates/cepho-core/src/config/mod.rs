//! Configuration for the validation engine.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod cepho_config;
pub mod citation_config;
pub mod defaults;
pub mod observability_config;
pub mod validation_config;

pub use cepho_config::CephoConfig;
pub use citation_config::CitationConfig;
pub use observability_config::ObservabilityConfig;
pub use validation_config::ValidationConfig;
