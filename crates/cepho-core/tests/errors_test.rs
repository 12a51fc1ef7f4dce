use cepho_core::errors::*;
use cepho_core::models::{ReferenceField, SourceType, VerificationStatus};

#[test]
fn unknown_variant_carries_kind_and_value() {
    let err = CephoError::UnknownVariant {
        kind: "source type",
        value: "podcast".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("source type"));
    assert!(msg.contains("podcast"));
}

#[test]
fn invalid_transition_names_both_states() {
    let err = CephoError::InvalidTransition {
        from: VerificationStatus::Unverified,
        to: VerificationStatus::Confirmed,
    };
    assert_eq!(
        err.to_string(),
        "invalid verification transition: unverified -> confirmed"
    );
}

#[test]
fn missing_field_names_reference_and_field() {
    let err = CitationError::MissingField {
        reference_id: "ref-7".into(),
        source_type: SourceType::Url,
        field: ReferenceField::Url,
    };
    assert_eq!(err.reference_id(), "ref-7");
    assert_eq!(
        err.to_string(),
        "reference ref-7 (url) is missing required field `url`"
    );
}

// --- From impls ---

#[test]
fn citation_error_converts_to_cepho_error() {
    let err = CitationError::MissingField {
        reference_id: "r".into(),
        source_type: SourceType::Document,
        field: ReferenceField::Title,
    };
    let cepho_err: CephoError = err.into();
    assert!(matches!(cepho_err, CephoError::CitationError(_)));
}

#[test]
fn config_error_converts_to_cepho_error() {
    let err = ConfigError::ValidationFailed {
        field: "citation.date_format".into(),
        message: "empty".into(),
    };
    let cepho_err: CephoError = err.into();
    assert!(matches!(cepho_err, CephoError::ConfigError(_)));
}

#[test]
fn citation_error_serializes_with_kind_tag() {
    let err = CitationError::MissingField {
        reference_id: "r1".into(),
        source_type: SourceType::ExpertStatement,
        field: ReferenceField::Author,
    };
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["kind"], "missing_field");
    assert_eq!(json["source_type"], "expert_statement");
    assert_eq!(json["field"], "author");
}
