/// Placeholder substituted into challenge templates.
pub const TRIGGER_PLACEHOLDER: &str = "{trigger}";

/// Placeholders substituted into footnote templates.
pub const TITLE_PLACEHOLDER: &str = "{title}";
pub const URL_PLACEHOLDER: &str = "{url}";
pub const AUTHOR_PLACEHOLDER: &str = "{author}";
pub const DATE_PLACEHOLDER: &str = "{date}";
