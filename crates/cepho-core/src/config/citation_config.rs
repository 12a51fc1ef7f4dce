use serde::{Deserialize, Serialize};

use super::defaults;

/// Citation formatter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationConfig {
    /// strftime pattern for retrieval dates in footnotes.
    pub date_format: String,
}

impl Default for CitationConfig {
    fn default() -> Self {
        Self {
            date_format: defaults::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}
