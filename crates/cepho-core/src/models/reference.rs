use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::CephoError;

/// Kind of external source backing an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Report, memo, filing, or other document.
    Document,
    /// Web page.
    Url,
    /// Statement made by a named expert.
    ExpertStatement,
    /// Dataset or data feed.
    DataSource,
}

impl SourceType {
    pub const ALL: [SourceType; 4] = [
        SourceType::Document,
        SourceType::Url,
        SourceType::ExpertStatement,
        SourceType::DataSource,
    ];

    /// The locator field a reference of this type cannot be cited without.
    pub const fn required_field(self) -> ReferenceField {
        match self {
            SourceType::Document | SourceType::DataSource => ReferenceField::Title,
            SourceType::Url => ReferenceField::Url,
            SourceType::ExpertStatement => ReferenceField::Author,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SourceType::Document => "document",
            SourceType::Url => "url",
            SourceType::ExpertStatement => "expert_statement",
            SourceType::DataSource => "data_source",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = CephoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "document" => Ok(SourceType::Document),
            "url" => Ok(SourceType::Url),
            "expert_statement" => Ok(SourceType::ExpertStatement),
            "data_source" => Ok(SourceType::DataSource),
            _ => Err(CephoError::UnknownVariant {
                kind: "source type",
                value: s.to_string(),
            }),
        }
    }
}

/// Locator fields a reference may be required to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceField {
    Title,
    Url,
    Author,
}

impl fmt::Display for ReferenceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReferenceField::Title => "title",
            ReferenceField::Url => "url",
            ReferenceField::Author => "author",
        })
    }
}

/// An external source cited by an insight. Owned by that insight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reference {
    pub id: String,
    pub source_type: SourceType,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Person quoted, for expert statements.
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub retrieved_on: Option<NaiveDate>,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// The span of insight text this reference supports.
    #[serde(default)]
    pub claim: Option<String>,
}

impl Reference {
    /// A bare reference with no locator fields set.
    pub fn new(id: impl Into<String>, source_type: SourceType) -> Self {
        Self {
            id: id.into(),
            source_type,
            title: None,
            url: None,
            author: None,
            retrieved_on: None,
            excerpt: None,
            claim: None,
        }
    }

    pub fn document(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, SourceType::Document).with_title(title)
    }

    pub fn url(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(id, SourceType::Url).with_url(url)
    }

    pub fn expert_statement(id: impl Into<String>, author: impl Into<String>) -> Self {
        Self::new(id, SourceType::ExpertStatement).with_author(author)
    }

    pub fn data_source(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, SourceType::DataSource).with_title(title)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn retrieved_on(mut self, date: NaiveDate) -> Self {
        self.retrieved_on = Some(date);
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn supporting(mut self, claim: impl Into<String>) -> Self {
        self.claim = Some(claim.into());
        self
    }

    /// Value of a locator field, `None` when absent or blank.
    pub fn field(&self, field: ReferenceField) -> Option<&str> {
        let value = match field {
            ReferenceField::Title => self.title.as_deref(),
            ReferenceField::Url => self.url.as_deref(),
            ReferenceField::Author => self.author.as_deref(),
        };
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    /// Whether the field required by the source type is present.
    pub fn is_well_formed(&self) -> bool {
        self.field(self.source_type.required_field()).is_some()
    }
}
