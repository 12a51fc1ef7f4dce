//! Golden dataset tests: each fixture under `golden/validation` carries an
//! insight and the expected validation outcome.

use cepho_core::models::{ChallengeAspect, ConfidenceLevel, Insight, ReviewSeverity, VerificationStatus};
use cepho_validation::ValidationEngine;
use serde::Deserialize;
use test_fixtures::{list_fixtures, load_fixture, relative_fixture_path};

#[derive(Debug, Deserialize)]
struct GoldenCase {
    description: String,
    input: GoldenInput,
    expected: GoldenExpected,
}

#[derive(Debug, Deserialize)]
struct GoldenInput {
    insight: Insight,
}

#[derive(Debug, Deserialize)]
struct GoldenExpected {
    confidence: ConfidenceLevel,
    verification: VerificationStatus,
    challenge_aspects: Vec<ChallengeAspect>,
    footnotes: Vec<String>,
    skipped_reference_ids: Vec<String>,
    review_severity: Option<ReviewSeverity>,
}

#[test]
fn golden_validation_cases() {
    let fixtures = list_fixtures("golden/validation");
    assert!(fixtures.len() >= 3, "expected golden fixtures, found {}", fixtures.len());

    let engine = ValidationEngine::default();
    for path in fixtures {
        let case: GoldenCase = load_fixture(&relative_fixture_path(&path));
        let result = engine.validate_insight(&case.input.insight);
        let name = &case.description;

        assert_eq!(result.confidence, case.expected.confidence, "{name}");
        assert_eq!(result.verification, case.expected.verification, "{name}");

        let aspects: Vec<ChallengeAspect> = result.challenges.iter().map(|c| c.aspect).collect();
        assert_eq!(aspects, case.expected.challenge_aspects, "{name}");

        let footnotes: Vec<&str> = result.citations.iter().map(|c| c.footnote.as_str()).collect();
        assert_eq!(footnotes, case.expected.footnotes, "{name}");

        let skipped: Vec<&str> = result
            .skipped
            .iter()
            .map(|s| s.reference_id.as_str())
            .collect();
        assert_eq!(skipped, case.expected.skipped_reference_ids, "{name}");

        assert_eq!(
            result.review_flag.map(|f| f.severity),
            case.expected.review_severity,
            "{name}"
        );
    }
}

#[test]
fn golden_claim_spans_point_into_content() {
    let case: GoldenCase = load_fixture("golden/validation/well_supported.json");
    let insight = &case.input.insight;
    let result = ValidationEngine::default().validate_insight(insight);

    let span = result.citations[0].claim_span.expect("claim should be located");
    assert_eq!(&insight.content()[span.start..span.end], "Gross margin rose 4 points");
    assert!(result.citations[1].claim_span.is_none());
    assert_eq!(
        result.citations[2].excerpt.as_deref(),
        Some("The new contract cut unit costs by roughly a tenth.")
    );
}
