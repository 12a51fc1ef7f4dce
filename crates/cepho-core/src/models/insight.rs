use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ConfidenceLevel, Reference, VerificationStatus};
use crate::errors::CephoResult;

/// One reviewer decision, appended to an insight's review log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReviewRecord {
    pub reviewer: String,
    /// Status the reviewer moved the insight to.
    pub status: VerificationStatus,
    #[serde(default)]
    pub note: Option<String>,
    pub reviewed_at: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn new(reviewer: impl Into<String>, status: VerificationStatus) -> Self {
        Self {
            reviewer: reviewer.into(),
            status,
            note: None,
            reviewed_at: Utc::now(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn at(mut self, reviewed_at: DateTime<Utc>) -> Self {
        self.reviewed_at = reviewed_at;
        self
    }
}

/// A unit of analysis emitted by an AI expert persona.
///
/// Content, authorship, confidence and references are fixed once built.
/// The only mutation is [`Insight::apply_review`], which appends to the
/// review log and advances the verification status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Insight {
    id: String,
    expert: String,
    content: String,
    created_at: DateTime<Utc>,
    confidence: ConfidenceLevel,
    #[serde(default)]
    status: VerificationStatus,
    #[serde(default)]
    references: Vec<Reference>,
    #[serde(default)]
    review_log: Vec<ReviewRecord>,
}

impl Insight {
    /// New unverified insight with a random id, timestamped now.
    pub fn new(
        expert: impl Into<String>,
        content: impl Into<String>,
        confidence: ConfidenceLevel,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            expert: expert.into(),
            content: content.into(),
            created_at: Utc::now(),
            confidence,
            status: VerificationStatus::Unverified,
            references: Vec::new(),
            review_log: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    pub fn with_references(mut self, references: impl IntoIterator<Item = Reference>) -> Self {
        self.references.extend(references);
        self
    }

    /// Hydrate the status recorded by the data-access layer.
    pub fn with_status(mut self, status: VerificationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn expert(&self) -> &str {
        &self.expert
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn confidence(&self) -> ConfidenceLevel {
        self.confidence
    }

    pub fn status(&self) -> VerificationStatus {
        self.status
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    pub fn review_log(&self) -> &[ReviewRecord] {
        &self.review_log
    }

    /// blake3 hex digest of the content.
    pub fn content_hash(&self) -> String {
        blake3::hash(self.content.as_bytes()).to_hex().to_string()
    }

    /// Record a reviewer decision.
    ///
    /// Illegal transitions are rejected and leave the insight untouched.
    pub fn apply_review(&mut self, record: ReviewRecord) -> CephoResult<VerificationStatus> {
        let next = self.status.transition(record.status)?;
        self.review_log.push(record);
        self.status = next;
        Ok(next)
    }
}
