//! Contribution record types

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::format;

/// Category assigned to records whose `component` is missing or blank
pub const DEFAULT_CATEGORY: &str = "Other";

/// A single open-source contribution, as supplied by the content source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRecord {
    /// Contribution title (usually the commit subject)
    pub title: String,
    /// ISO-ish date string
    #[serde(default)]
    pub date: String,
    /// Category label; `None` or blank means [`DEFAULT_CATEGORY`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Link to the upstream commit or change record (may be empty)
    #[serde(
        default,
        rename = "github",
        alias = "sourceUrl",
        alias = "source_url",
        deserialize_with = "null_as_empty"
    )]
    pub source_url: String,
    /// Secondary external link, carried through for presentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ContributionRecord {
    /// Create a record with a title and date and no category or link
    #[must_use]
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            component: None,
            source_url: String::new(),
            external: None,
        }
    }

    /// Set the category label
    #[must_use]
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set the upstream link
    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// The category this record is grouped under
    ///
    /// Falls back to [`DEFAULT_CATEGORY`] when `component` is absent or
    /// contains only whitespace.
    #[must_use]
    pub fn category(&self) -> &str {
        match self.component.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// Check whether the record links to an upstream change
    #[must_use]
    pub fn has_source(&self) -> bool {
        !self.source_url.trim().is_empty()
    }

    /// Short hash taken from the final segment of the upstream link
    #[must_use]
    pub fn short_hash(&self) -> String {
        format::short_hash(&self.source_url)
    }

    /// Display form of the date, e.g. `May 10, 2023`
    #[must_use]
    pub fn date_label(&self) -> String {
        format::format_date(&self.date)
    }

    /// Calendar date, if `date` parses
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        format::parse_date(&self.date)
    }
}
