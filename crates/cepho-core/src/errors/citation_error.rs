use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{ReferenceField, SourceType};

/// Citation formatting errors.
///
/// Recoverable: the engine records these per reference and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CitationError {
    #[error("reference {reference_id} ({source_type}) is missing required field `{field}`")]
    MissingField {
        reference_id: String,
        source_type: SourceType,
        field: ReferenceField,
    },
}

impl CitationError {
    /// Id of the reference that failed to format.
    pub fn reference_id(&self) -> &str {
        match self {
            CitationError::MissingField { reference_id, .. } => reference_id,
        }
    }
}
