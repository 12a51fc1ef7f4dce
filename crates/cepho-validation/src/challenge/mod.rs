//! Socratic challenge questions.
//!
//! Each aspect is checked in [`ChallengeAspect::PRIORITY`] order and yields
//! at most one question. An empty list means nothing tripped, which is a
//! valid outcome.
//!
//! [`ChallengeAspect::PRIORITY`]: cepho_core::models::ChallengeAspect::PRIORITY

pub mod generator;
pub mod heuristics;
pub mod templates;

pub use generator::ChallengeGenerator;
pub use templates::{ChallengeTemplates, DEFAULT_CHALLENGE_TEMPLATES};

use cepho_core::models::{Challenge, Insight};

/// Generate challenges with the default templates and a threshold of one
/// supporting reference.
pub fn generate_challenge_questions(insight: &Insight) -> Vec<Challenge> {
    ChallengeGenerator::default().generate(insight)
}
