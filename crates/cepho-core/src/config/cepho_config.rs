//! Top-level configuration with layered resolution.

use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::{CitationConfig, ObservabilityConfig, ValidationConfig};
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CEPHO_*`)
/// 2. TOML file passed to [`CephoConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CephoConfig {
    pub validation: ValidationConfig,
    pub citation: CitationConfig,
    pub observability: ObservabilityConfig,
}

impl CephoConfig {
    /// Load configuration from an optional TOML file plus the process
    /// environment, then validate it.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `CEPHO_*` overrides through `lookup`.
    ///
    /// Values that fail to parse are ignored and the previous value kept.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("CEPHO_MIN_SUPPORTING_REFERENCES") {
            if let Ok(v) = val.trim().parse::<usize>() {
                self.validation.min_supporting_references = v;
            }
        }
        if let Some(val) = lookup("CEPHO_FLAG_FOR_REVIEW") {
            if let Ok(v) = val.trim().parse::<bool>() {
                self.validation.flag_for_review = v;
            }
        }
        if let Some(val) = lookup("CEPHO_DATE_FORMAT") {
            self.citation.date_format = val;
        }
        if let Some(val) = lookup("CEPHO_LOG_LEVEL") {
            self.observability.log_level = val.trim().to_ascii_lowercase();
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.validation.min_supporting_references == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "validation.min_supporting_references".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let date_format = &self.citation.date_format;
        if date_format.trim().is_empty()
            || StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error))
        {
            return Err(ConfigError::ValidationFailed {
                field: "citation.date_format".to_string(),
                message: format!("invalid strftime pattern {date_format:?}"),
            });
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }
}
