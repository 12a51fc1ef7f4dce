// Single source of truth for all default values.

// --- Validation ---
pub const DEFAULT_MIN_SUPPORTING_REFERENCES: usize = 1;
pub const DEFAULT_FLAG_FOR_REVIEW: bool = true;

// --- Citation ---
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
