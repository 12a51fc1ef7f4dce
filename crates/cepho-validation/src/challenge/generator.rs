use cepho_core::config::defaults::DEFAULT_MIN_SUPPORTING_REFERENCES;
use cepho_core::models::{Challenge, ChallengeAspect, Insight};
use tracing::debug;

use super::heuristics;
use super::templates::{ChallengeTemplates, DEFAULT_CHALLENGE_TEMPLATES};

/// Template-driven challenge generator.
#[derive(Debug, Clone)]
pub struct ChallengeGenerator {
    templates: &'static ChallengeTemplates,
    /// Well-formed references needed to suppress the evidence challenge.
    min_supporting_references: usize,
}

impl ChallengeGenerator {
    pub fn new(templates: &'static ChallengeTemplates, min_supporting_references: usize) -> Self {
        Self {
            templates,
            min_supporting_references: min_supporting_references.max(1),
        }
    }

    pub fn min_supporting_references(&self) -> usize {
        self.min_supporting_references
    }

    /// Generate challenges in aspect priority order. Deterministic.
    pub fn generate(&self, insight: &Insight) -> Vec<Challenge> {
        let challenges: Vec<Challenge> = ChallengeAspect::PRIORITY
            .iter()
            .filter_map(|&aspect| self.evaluate(aspect, insight))
            .collect();

        debug!(
            insight_id = %insight.id(),
            count = challenges.len(),
            "challenge pass complete"
        );
        challenges
    }

    fn evaluate(&self, aspect: ChallengeAspect, insight: &Insight) -> Option<Challenge> {
        let text = insight.content();
        let trigger = match aspect {
            ChallengeAspect::MissingEvidence => {
                if supporting_references(insight) >= self.min_supporting_references {
                    return None;
                }
                None
            }
            ChallengeAspect::UnstatedAssumption => {
                let phrase = heuristics::certainty_trigger(text)?;
                Some(phrase)
            }
            ChallengeAspect::AlternativeExplanation => {
                let phrase = heuristics::causal_trigger(text)?;
                Some(phrase)
            }
            ChallengeAspect::ScopeBoundary => {
                let phrase = heuristics::scope_trigger(text)?;
                Some(phrase)
            }
        };

        Some(Challenge {
            aspect,
            question: self.templates.render(aspect, trigger.as_deref()),
            trigger,
        })
    }
}

/// Number of references that can actually be cited.
fn supporting_references(insight: &Insight) -> usize {
    insight
        .references()
        .iter()
        .filter(|r| r.is_well_formed())
        .count()
}

impl Default for ChallengeGenerator {
    fn default() -> Self {
        Self::new(
            &DEFAULT_CHALLENGE_TEMPLATES,
            DEFAULT_MIN_SUPPORTING_REFERENCES,
        )
    }
}
