use cepho_core::models::{
    ChallengeAspect, ConfidenceLevel, Insight, Reference, SourceType, VerificationStatus,
};
use cepho_validation::{derive_confidence, generate_challenge_questions, validate_insight};
use proptest::prelude::*;

fn confidence_strategy() -> impl Strategy<Value = ConfidenceLevel> {
    prop::sample::select(ConfidenceLevel::ALL.to_vec())
}

fn status_strategy() -> impl Strategy<Value = VerificationStatus> {
    prop::sample::select(VerificationStatus::ALL.to_vec())
}

fn reference_strategy() -> impl Strategy<Value = Reference> {
    (
        "[a-z]{1,8}",
        prop::sample::select(SourceType::ALL.to_vec()),
        prop::option::of("[A-Za-z ]{0,20}"),
        prop::option::of("https://[a-z]{1,10}\\.com"),
        prop::option::of("[A-Z][a-z]{1,10}"),
    )
        .prop_map(|(id, source_type, title, url, author)| {
            let mut reference = Reference::new(id, source_type);
            reference.title = title;
            reference.url = url;
            reference.author = author;
            reference
        })
}

proptest! {
    #[test]
    fn derived_confidence_never_exceeds_input(
        level in confidence_strategy(),
        status in status_strategy(),
    ) {
        prop_assert!(derive_confidence(level, status) <= level);
    }

    #[test]
    fn verified_requires_confirmation(
        level in confidence_strategy(),
        status in status_strategy(),
    ) {
        if derive_confidence(level, status) == ConfidenceLevel::Verified {
            prop_assert_eq!(status, VerificationStatus::Confirmed);
        }
    }

    #[test]
    fn challenges_are_deterministic_and_ordered(
        text in ".{0,200}",
        references in prop::collection::vec(reference_strategy(), 0..5),
    ) {
        let insight = Insight::new("p", text, ConfidenceLevel::Medium)
            .with_id("p")
            .with_references(references);
        let first = generate_challenge_questions(&insight);
        let second = generate_challenge_questions(&insight);
        prop_assert_eq!(&first, &second);

        let aspects: Vec<ChallengeAspect> = first.iter().map(|c| c.aspect).collect();
        let mut sorted = aspects.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(aspects, sorted);
    }

    #[test]
    fn no_references_always_challenges_evidence(text in ".{0,200}") {
        let insight = Insight::new("p", text, ConfidenceLevel::High);
        let challenges = generate_challenge_questions(&insight);
        prop_assert_eq!(challenges.first().map(|c| c.aspect), Some(ChallengeAspect::MissingEvidence));
    }

    #[test]
    fn every_reference_is_cited_or_skipped(
        references in prop::collection::vec(reference_strategy(), 0..8),
        level in confidence_strategy(),
        status in status_strategy(),
    ) {
        let total = references.len();
        let well_formed = references.iter().filter(|r| r.is_well_formed()).count();
        let insight = Insight::new("p", "Margins rose.", level)
            .with_id("p")
            .with_status(status)
            .with_references(references);
        let result = validate_insight(&insight);

        prop_assert_eq!(result.citations.len() + result.skipped_count(), total);
        prop_assert_eq!(result.citations.len(), well_formed);
        for (i, citation) in result.citations.iter().enumerate() {
            prop_assert_eq!(citation.number as usize, i + 1);
            prop_assert!(!citation.footnote.is_empty());
        }
        prop_assert_eq!(result.clone(), validate_insight(&insight));
    }
}
