use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Byte range of a claim inside an insight's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClaimSpan {
    pub start: usize,
    pub end: usize,
}

impl ClaimSpan {
    /// Zero when `end` does not exceed `start`.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A reference rendered as a footnote. Derived data, regenerated on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Citation {
    pub reference_id: String,
    /// 1-based footnote number.
    pub number: u32,
    pub footnote: String,
    pub excerpt: Option<String>,
    /// Where the supported claim sits in the insight text, if located.
    pub claim_span: Option<ClaimSpan>,
}
