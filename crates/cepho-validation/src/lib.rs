//! # cepho-validation
//!
//! Insight validation for AI expert output: confidence derivation,
//! Socratic challenge questions, citation footnotes, review flagging,
//! and a plain-text validation summary.
//!
//! ## Pipeline
//! 1. **Confidence** — clamp the stated confidence against reviewer status
//! 2. **Challenges** — evidence, assumption, alternative, scope heuristics
//! 3. **Citations** — source-type footnotes; malformed references skipped
//! 4. **Flagging** — mark results a human should look at
//!
//! Every step is a pure function of the insight. Per-reference formatting
//! failures are carried in the result, never raised.

pub mod challenge;
pub mod citation;
pub mod confidence;
pub mod engine;
pub mod flagging;
pub mod summary;
pub mod tracing_setup;

pub use challenge::{generate_challenge_questions, ChallengeGenerator};
pub use citation::{format_citation_footnote, CitationFormatter};
pub use confidence::derive_confidence;
pub use engine::{validate_insight, ValidationEngine};
pub use summary::render_summary;
