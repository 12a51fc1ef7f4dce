use cepho_core::constants::TRIGGER_PLACEHOLDER;
use cepho_core::models::ChallengeAspect;

/// Question templates, one per aspect. `{trigger}` is replaced by the
/// phrase that tripped the heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeTemplates {
    pub missing_evidence: &'static str,
    pub unstated_assumption: &'static str,
    pub alternative_explanation: &'static str,
    pub scope_boundary: &'static str,
}

pub static DEFAULT_CHALLENGE_TEMPLATES: ChallengeTemplates = ChallengeTemplates {
    missing_evidence: "What evidence supports this insight beyond what is cited so far?",
    unstated_assumption: "The insight asserts \"{trigger}\". What must be true for that to hold, and has it been tested?",
    alternative_explanation: "The insight links cause and effect (\"{trigger}\"). What other factor could explain the same outcome?",
    scope_boundary: "The insight generalises (\"{trigger}\"). Which markets, segments, or periods might it not apply to?",
};

impl ChallengeTemplates {
    pub fn template(&self, aspect: ChallengeAspect) -> &'static str {
        match aspect {
            ChallengeAspect::MissingEvidence => self.missing_evidence,
            ChallengeAspect::UnstatedAssumption => self.unstated_assumption,
            ChallengeAspect::AlternativeExplanation => self.alternative_explanation,
            ChallengeAspect::ScopeBoundary => self.scope_boundary,
        }
    }

    /// Render the question for `aspect`.
    pub fn render(&self, aspect: ChallengeAspect, trigger: Option<&str>) -> String {
        let template = self.template(aspect);
        match trigger {
            Some(trigger) => template.replacen(TRIGGER_PLACEHOLDER, trigger, 1),
            None => template.to_string(),
        }
    }
}
