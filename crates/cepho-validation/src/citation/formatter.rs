use std::fmt::Write;

use cepho_core::config::defaults::DEFAULT_DATE_FORMAT;
use cepho_core::errors::CitationError;
use cepho_core::models::{Citation, ClaimSpan, Insight, Reference, SkippedReference, SourceType};
use chrono::NaiveDate;
use tracing::debug;

use super::templates::{fill, Fields, FootnoteTemplates, DEFAULT_FOOTNOTE_TEMPLATES};

/// Renders references as footnotes and binds them to claim spans.
#[derive(Debug, Clone)]
pub struct CitationFormatter {
    templates: &'static FootnoteTemplates,
    date_format: String,
}

impl CitationFormatter {
    pub fn new(templates: &'static FootnoteTemplates, date_format: impl Into<String>) -> Self {
        Self {
            templates,
            date_format: date_format.into(),
        }
    }

    /// Render the footnote text for a reference.
    pub fn format_footnote(&self, reference: &Reference) -> Result<String, CitationError> {
        let required = reference.source_type.required_field();
        if reference.field(required).is_none() {
            return Err(CitationError::MissingField {
                reference_id: reference.id.clone(),
                source_type: reference.source_type,
                field: required,
            });
        }

        let date = reference.retrieved_on.map(|d| self.format_date(d));
        let fields = Fields {
            title: reference.title.as_deref().map(str::trim).filter(|t| !t.is_empty()),
            url: reference.url.as_deref().map(str::trim),
            author: reference.author.as_deref().map(str::trim),
            date: date.as_deref(),
        };

        let t = self.templates;
        let template = match reference.source_type {
            SourceType::Document if fields.date.is_some() => t.document,
            SourceType::Document => t.document_undated,
            SourceType::Url if fields.title.is_some() => t.url,
            SourceType::Url => t.url_untitled,
            SourceType::ExpertStatement if fields.date.is_some() => t.expert_statement,
            SourceType::ExpertStatement => t.expert_statement_undated,
            SourceType::DataSource if fields.date.is_some() => t.data_source,
            SourceType::DataSource => t.data_source_undated,
        };

        Ok(fill(template, &fields))
    }

    /// Build the citation for a reference, numbered `number`, locating its
    /// claim inside `content`.
    pub fn cite(
        &self,
        reference: &Reference,
        number: u32,
        content: &str,
    ) -> Result<Citation, CitationError> {
        let footnote = self.format_footnote(reference)?;
        Ok(Citation {
            reference_id: reference.id.clone(),
            number,
            footnote,
            excerpt: reference
                .excerpt
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(String::from),
            claim_span: reference
                .claim
                .as_deref()
                .and_then(|claim| locate_claim(content, claim)),
        })
    }

    /// Cite every reference of an insight in order.
    ///
    /// Malformed references are skipped and reported; footnote numbers stay
    /// consecutive over the citations that succeeded.
    pub fn cite_all(&self, insight: &Insight) -> (Vec<Citation>, Vec<SkippedReference>) {
        let mut citations = Vec::new();
        let mut skipped = Vec::new();

        for reference in insight.references() {
            let number = citations.len() as u32 + 1;
            match self.cite(reference, number, insight.content()) {
                Ok(citation) => citations.push(citation),
                Err(err) => {
                    debug!(
                        insight_id = %insight.id(),
                        reference_id = %reference.id,
                        error = %err,
                        "skipping malformed reference"
                    );
                    skipped.push(SkippedReference::from(err));
                }
            }
        }

        (citations, skipped)
    }

    fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            // Unvalidated pattern; fall back to ISO 8601.
            out = date.to_string();
        }
        out
    }
}

impl Default for CitationFormatter {
    fn default() -> Self {
        Self::new(&DEFAULT_FOOTNOTE_TEMPLATES, DEFAULT_DATE_FORMAT)
    }
}

/// ASCII case-insensitive search for a claim; offsets are bytes into `content`.
fn locate_claim(content: &str, claim: &str) -> Option<ClaimSpan> {
    let needle = claim.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return None;
    }
    let start = content.to_ascii_lowercase().find(&needle)?;
    Some(ClaimSpan {
        start,
        end: start + needle.len(),
    })
}
