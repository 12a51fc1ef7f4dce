use cepho_core::errors::CephoError;
use cepho_core::models::{ConfidenceLevel, Insight, ReviewRecord, VerificationStatus};
use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = VerificationStatus> {
    prop::sample::select(VerificationStatus::ALL.to_vec())
}

proptest! {
    #[test]
    fn transition_succeeds_iff_allowed(from in status_strategy(), to in status_strategy()) {
        match from.transition(to) {
            Ok(next) => {
                prop_assert!(from.can_transition_to(to));
                prop_assert_eq!(next, to);
            }
            Err(CephoError::InvalidTransition { from: f, to: t }) => {
                prop_assert!(!from.can_transition_to(to));
                prop_assert_eq!((f, t), (from, to));
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn no_self_transitions(status in status_strategy()) {
        prop_assert!(!status.can_transition_to(status));
    }

    #[test]
    fn nothing_returns_to_unverified(from in status_strategy()) {
        prop_assert!(!from.can_transition_to(VerificationStatus::Unverified));
    }

    #[test]
    fn every_reviewed_state_reopens_to_pending(status in status_strategy()) {
        if status != VerificationStatus::Pending {
            prop_assert!(status.can_transition_to(VerificationStatus::Pending));
        }
    }

    #[test]
    fn apply_review_mutates_only_on_legal_moves(
        start in status_strategy(),
        moves in prop::collection::vec(status_strategy(), 0..12),
    ) {
        let mut insight = Insight::new("analyst", "Margins hold.", ConfidenceLevel::Medium)
            .with_status(start);
        let mut expected_status = start;
        let mut expected_len = 0;

        for next in moves {
            let legal = expected_status.can_transition_to(next);
            let outcome = insight.apply_review(ReviewRecord::new("reviewer", next));
            prop_assert_eq!(outcome.is_ok(), legal);
            if legal {
                expected_status = next;
                expected_len += 1;
            }
            prop_assert_eq!(insight.status(), expected_status);
            prop_assert_eq!(insight.review_log().len(), expected_len);
        }
    }

    #[test]
    fn wire_name_parses_back(status in status_strategy()) {
        let parsed: VerificationStatus = status.as_str().parse().unwrap();
        prop_assert_eq!(parsed, status);
    }
}
