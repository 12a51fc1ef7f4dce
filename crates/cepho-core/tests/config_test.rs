use std::collections::HashMap;

use cepho_core::config::*;
use cepho_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CephoConfig::from_toml("").unwrap();

    assert_eq!(config.validation.min_supporting_references, 1);
    assert!(config.validation.flag_for_review);
    assert_eq!(config.citation.date_format, "%Y-%m-%d");
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
    assert!(config.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[validation]
min_supporting_references = 2

[citation]
date_format = "%B %-d, %Y"
"#;
    let config = CephoConfig::from_toml(toml).unwrap();
    assert_eq!(config.validation.min_supporting_references, 2);
    assert_eq!(config.citation.date_format, "%B %-d, %Y");
    // Non-overridden fields keep defaults
    assert!(config.validation.flag_for_review);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_rejects_malformed_toml() {
    let err = CephoConfig::from_toml("[validation\nmin_supporting_references = 1").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = CephoConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = CephoConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn env_overrides_take_precedence_over_file_values() {
    let mut config = CephoConfig::from_toml("[validation]\nmin_supporting_references = 3").unwrap();
    let env: HashMap<&str, &str> = [
        ("CEPHO_MIN_SUPPORTING_REFERENCES", "2"),
        ("CEPHO_FLAG_FOR_REVIEW", "false"),
        ("CEPHO_LOG_LEVEL", "DEBUG"),
    ]
    .into_iter()
    .collect();

    config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.validation.min_supporting_references, 2);
    assert!(!config.validation.flag_for_review);
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn unparseable_env_override_keeps_previous_value() {
    let mut config = CephoConfig::default();
    config.apply_overrides(|key| {
        (key == "CEPHO_MIN_SUPPORTING_REFERENCES").then(|| "several".to_string())
    });
    assert_eq!(config.validation.min_supporting_references, 1);
}

#[test]
fn validate_rejects_zero_reference_threshold() {
    let mut config = CephoConfig::default();
    config.validation.min_supporting_references = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("validation.min_supporting_references"));
}

#[test]
fn validate_rejects_bad_date_format_and_log_level() {
    let mut config = CephoConfig::default();
    config.citation.date_format = "%Q".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "citation.date_format"
    ));

    let mut config = CephoConfig::default();
    config.observability.log_level = "verbose".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "observability.log_level"
    ));
}

#[test]
fn load_reports_missing_file() {
    let err = CephoConfig::load(Some(std::path::Path::new(
        "/nonexistent/cepho/config.toml",
    )))
    .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}
