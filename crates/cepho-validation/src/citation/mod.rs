//! Reference → footnote rendering.
//!
//! Each source type has a footnote template. A reference missing the
//! locator its type requires fails with [`CitationError::MissingField`];
//! the engine records the failure and moves on to the next reference.
//!
//! [`CitationError::MissingField`]: cepho_core::errors::CitationError::MissingField

pub mod formatter;
pub mod templates;

pub use formatter::CitationFormatter;
pub use templates::{FootnoteTemplates, DEFAULT_FOOTNOTE_TEMPLATES};

use cepho_core::errors::CitationError;
use cepho_core::models::Reference;

/// Format a footnote with the default templates and ISO dates.
pub fn format_citation_footnote(reference: &Reference) -> Result<String, CitationError> {
    CitationFormatter::default().format_footnote(reference)
}
