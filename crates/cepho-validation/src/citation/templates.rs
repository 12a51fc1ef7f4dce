use cepho_core::constants::{
    AUTHOR_PLACEHOLDER, DATE_PLACEHOLDER, TITLE_PLACEHOLDER, URL_PLACEHOLDER,
};

/// Footnote templates per source type.
///
/// Placeholders: `{title}`, `{url}`, `{author}`, `{date}`. The `*_undated`
/// and `url_untitled` variants are used when the optional field is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteTemplates {
    pub document: &'static str,
    pub document_undated: &'static str,
    pub url: &'static str,
    pub url_untitled: &'static str,
    pub expert_statement: &'static str,
    pub expert_statement_undated: &'static str,
    pub data_source: &'static str,
    pub data_source_undated: &'static str,
}

pub static DEFAULT_FOOTNOTE_TEMPLATES: FootnoteTemplates = FootnoteTemplates {
    document: "{title}, retrieved {date}",
    document_undated: "{title}",
    url: "{title} <{url}>",
    url_untitled: "<{url}>",
    expert_statement: "{author}, personal communication, {date}",
    expert_statement_undated: "{author}, personal communication",
    data_source: "{title} [data source], retrieved {date}",
    data_source_undated: "{title} [data source]",
};

/// Values substituted into a template.
#[derive(Debug, Default)]
pub(crate) struct Fields<'a> {
    pub title: Option<&'a str>,
    pub url: Option<&'a str>,
    pub author: Option<&'a str>,
    pub date: Option<&'a str>,
}

/// Substitute placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so a title containing `{url}`
/// is rendered literally. Unknown or unset placeholders are kept as-is.
pub(crate) fn fill(template: &str, fields: &Fields<'_>) -> String {
    let slots = [
        (TITLE_PLACEHOLDER, fields.title),
        (URL_PLACEHOLDER, fields.url),
        (AUTHOR_PLACEHOLDER, fields.author),
        (DATE_PLACEHOLDER, fields.date),
    ];

    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match slots
            .iter()
            .find(|(placeholder, value)| value.is_some() && tail.starts_with(placeholder))
        {
            Some((placeholder, Some(value))) => {
                out.push_str(value);
                rest = &tail[placeholder.len()..];
            }
            _ => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_substitutes_known_placeholders() {
        let fields = Fields {
            title: Some("Q3 Report"),
            date: Some("2026-03-01"),
            ..Fields::default()
        };
        assert_eq!(
            fill("{title}, retrieved {date}", &fields),
            "Q3 Report, retrieved 2026-03-01"
        );
    }

    #[test]
    fn fill_does_not_rescan_substituted_values() {
        let fields = Fields {
            title: Some("Why {url} matters"),
            url: Some("https://example.com"),
            ..Fields::default()
        };
        assert_eq!(
            fill("{title} <{url}>", &fields),
            "Why {url} matters <https://example.com>"
        );
    }

    #[test]
    fn fill_keeps_unset_placeholders_and_stray_braces() {
        let fields = Fields::default();
        assert_eq!(fill("{title} {x", &fields), "{title} {x");
    }
}
