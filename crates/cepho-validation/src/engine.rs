//! ValidationEngine: derives confidence, generates challenges, formats
//! citations, and flags results for review.

use cepho_core::config::{CephoConfig, ValidationConfig};
use cepho_core::models::{Insight, ValidationResult};
use cepho_core::traits::IInsightValidator;
use rayon::prelude::*;
use tracing::info;

use crate::challenge::{ChallengeGenerator, ChallengeTemplates};
use crate::citation::{CitationFormatter, FootnoteTemplates};
use crate::confidence::derive_confidence;
use crate::flagging;

/// The insight validation engine.
///
/// Holds only immutable configuration, so one engine can be shared across
/// threads and requests.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    config: ValidationConfig,
    challenges: ChallengeGenerator,
    citations: CitationFormatter,
}

impl ValidationEngine {
    pub fn new(config: &CephoConfig) -> Self {
        Self {
            config: config.validation.clone(),
            challenges: ChallengeGenerator::new(
                &crate::challenge::DEFAULT_CHALLENGE_TEMPLATES,
                config.validation.min_supporting_references,
            ),
            citations: CitationFormatter::new(
                &crate::citation::DEFAULT_FOOTNOTE_TEMPLATES,
                config.citation.date_format.clone(),
            ),
        }
    }

    /// Swap in custom challenge templates.
    pub fn with_challenge_templates(mut self, templates: &'static ChallengeTemplates) -> Self {
        self.challenges =
            ChallengeGenerator::new(templates, self.config.min_supporting_references);
        self
    }

    /// Swap in custom footnote templates and date format.
    pub fn with_footnote_templates(
        mut self,
        templates: &'static FootnoteTemplates,
        date_format: impl Into<String>,
    ) -> Self {
        self.citations = CitationFormatter::new(templates, date_format);
        self
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate one insight.
    pub fn validate_insight(&self, insight: &Insight) -> ValidationResult {
        let span = crate::validation_span!(insight.id());
        let _guard = span.enter();

        let confidence = derive_confidence(insight.confidence(), insight.status());
        let challenges = self.challenges.generate(insight);
        let (citations, skipped) = self.citations.cite_all(insight);

        let mut result = ValidationResult {
            insight_id: insight.id().to_string(),
            content_hash: insight.content_hash(),
            confidence,
            verification: insight.status(),
            challenges,
            citations,
            skipped,
            review_flag: None,
        };
        if self.config.flag_for_review {
            result.review_flag = flagging::flag_for_review(&result);
        }

        info!(
            confidence = %result.confidence,
            verification = %result.verification,
            challenges = result.challenges.len(),
            citations = result.citations.len(),
            skipped = result.skipped_count(),
            flagged = result.needs_review(),
            "insight validated"
        );
        result
    }

    /// Validate many insights on the rayon pool. Output order matches input.
    pub fn validate_batch(&self, insights: &[Insight]) -> Vec<ValidationResult> {
        insights
            .par_iter()
            .map(|insight| self.validate_insight(insight))
            .collect()
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(&CephoConfig::default())
    }
}

impl IInsightValidator for ValidationEngine {
    fn validate(&self, insight: &Insight) -> ValidationResult {
        self.validate_insight(insight)
    }
}

/// Validate an insight with the default configuration.
pub fn validate_insight(insight: &Insight) -> ValidationResult {
    ValidationEngine::default().validate_insight(insight)
}
