//! Phrase detectors behind the assumption, alternative, and scope aspects.

use regex::Regex;
use std::sync::LazyLock;

/// Certainty language that hides an assumption.
static CERTAINTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(will definitely|no doubt|undoubtedly|inevitably|guaranteed|guarantees?|certainly|clearly|obviously|always|never|must)\b",
    )
    .unwrap()
});

/// Causal claims that may have another explanation.
static CAUSAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(because|due to|caused by|as a result|results? in|leads? to|driven by|drives|therefore)\b",
    )
    .unwrap()
});

/// Generalisations that may overreach their evidence.
static SCOPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(across the board|in every market|universally|everyone|everybody|every|all|any)\b",
    )
    .unwrap()
});

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_lowercase())
}

pub fn certainty_trigger(text: &str) -> Option<String> {
    first_match(&CERTAINTY_RE, text)
}

pub fn causal_trigger(text: &str) -> Option<String> {
    first_match(&CAUSAL_RE, text)
}

pub fn scope_trigger(text: &str) -> Option<String> {
    first_match(&SCOPE_RE, text)
}
