//! Record module - the biographical input entries

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One biographical entry as produced by the upstream scraper
///
/// Only `name` is required. Mapping fields keep the document order of the
/// input so evidence and biography selection are reproducible. Values that
/// are not strings are kept as-is but never contribute text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Display name of the person
    pub name: String,

    /// Source page URL
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Infobox fields (label → value)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infobox: Option<IndexMap<String, Value>>,

    /// Article sections (heading → body)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_sections: Option<IndexMap<String, Value>>,

    /// Internal links found in the article
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_links: Option<Vec<InternalLink>>,
}

/// A link from the article to another page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalLink {
    /// Display text of the link
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Link target
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Record {
    /// Create a record with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            infobox: None,
            article_sections: None,
            internal_links: None,
        }
    }

    /// Add an infobox field (builder style, mostly for tests and fixtures)
    pub fn with_infobox(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.infobox
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), Value::String(value.into()));
        self
    }

    /// Add an article section (builder style)
    pub fn with_section(mut self, heading: impl Into<String>, body: impl Into<String>) -> Self {
        self.article_sections
            .get_or_insert_with(IndexMap::new)
            .insert(heading.into(), Value::String(body.into()));
        self
    }

    /// Add an internal link (builder style)
    pub fn with_link(mut self, text: Option<&str>, href: Option<&str>) -> Self {
        self.internal_links.get_or_insert_with(Vec::new).push(InternalLink {
            text: text.map(str::to_string),
            href: href.map(str::to_string),
        });
        self
    }

    /// Infobox entries whose value is a string, in document order
    pub fn infobox_text(&self) -> impl Iterator<Item = (&str, &str)> {
        string_entries(self.infobox.as_ref())
    }

    /// Article sections whose body is a string, in document order
    pub fn section_text(&self) -> impl Iterator<Item = (&str, &str)> {
        string_entries(self.article_sections.as_ref())
    }

    /// String value of one infobox field
    pub fn infobox_value(&self, key: &str) -> Option<&str> {
        self.infobox.as_ref()?.get(key)?.as_str()
    }

    /// String body of one article section
    pub fn section(&self, heading: &str) -> Option<&str> {
        self.article_sections.as_ref()?.get(heading)?.as_str()
    }

    /// Internal links, empty when absent
    pub fn links(&self) -> &[InternalLink] {
        self.internal_links.as_deref().unwrap_or(&[])
    }
}

fn string_entries(map: Option<&IndexMap<String, Value>>) -> impl Iterator<Item = (&str, &str)> {
    map.into_iter()
        .flat_map(|m| m.iter())
        .filter_map(|(k, v)| v.as_str().map(|s| (k.as_str(), s)))
}

/// Accept any JSON value, keeping it only when it is a string
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}
