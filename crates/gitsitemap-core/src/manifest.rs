//! Site manifest model.
//!
//! A manifest is a JSON object whose values describe the pages of a site.
//! Keys are arbitrary and only their order matters.

use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::path::Path;
use std::str::FromStr;

/// Priority of a URL, kept as the text it will be emitted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Priority(String);

impl Priority {
    /// Stringify any non-null JSON value; strings are kept verbatim.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self(s.clone())),
            other => Some(Self(other.to_string())),
        }
    }

    /// Get the priority as emitted in the sitemap.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page record in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// URL path, `/` when absent
    pub loc: Option<String>,
    /// Crawl priority
    pub priority: Option<Priority>,
    /// Expected change frequency
    pub changefreq: Option<String>,
    /// Set to `false` to leave the page out of the sitemap
    pub sitemap_include: Option<bool>,
    /// Source file fragment (`srcFile`), expanded through a [`SourceLayout`](crate::SourceLayout)
    pub src_file: Option<String>,
}

impl Entry {
    /// Decode a record field by field.
    ///
    /// A field with an unexpected JSON type is dropped with a warning; the
    /// rest of the record is kept. Unknown keys are ignored.
    pub fn from_object(key: &str, object: &Map<String, Value>) -> Self {
        Self {
            loc: string_field(key, object, "loc"),
            priority: object.get("priority").and_then(Priority::from_value),
            changefreq: string_field(key, object, "changefreq"),
            sitemap_include: include_field(key, object),
            src_file: string_field(key, object, "srcFile"),
        }
    }

    /// Whether the entry belongs in the sitemap.
    pub fn is_included(&self) -> bool {
        self.sitemap_include != Some(false)
    }

    /// The URL location, defaulting to the site root.
    pub fn loc(&self) -> &str {
        match self.loc.as_deref() {
            Some(loc) if !loc.is_empty() => loc,
            _ => "/",
        }
    }

    /// The change frequency, if set and non-empty.
    pub fn changefreq(&self) -> Option<&str> {
        self.changefreq.as_deref().filter(|c| !c.is_empty())
    }
}

/// A manifest value, classified at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestItem {
    /// A record describing a page
    Entry(Entry),
    /// A value that is not a usable record
    Skipped(String),
}

/// A parsed manifest, in document order.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    items: Vec<(String, ManifestItem)>,
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Build a manifest from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::Manifest(format!(
                    "top-level value must be a JSON object, found {}",
                    json_kind(&other)
                )))
            }
        };

        let items = map
            .into_iter()
            .map(|(key, value)| {
                let item = classify(&key, value);
                if let ManifestItem::Skipped(reason) = &item {
                    tracing::debug!("Skipping manifest key '{}': {}", key, reason);
                }
                (key, item)
            })
            .collect();

        Ok(Self { items })
    }

    /// Iterate over every key and item in document order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &ManifestItem)> {
        self.items.iter().map(|(k, item)| (k.as_str(), item))
    }

    /// Iterate over the page records only.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.items().filter_map(|(k, item)| match item {
            ManifestItem::Entry(entry) => Some((k, entry)),
            ManifestItem::Skipped(_) => None,
        })
    }

    /// Number of top-level values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the manifest has no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromStr for Manifest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(value)
    }
}

fn classify(key: &str, value: Value) -> ManifestItem {
    match value {
        Value::Object(object) => ManifestItem::Entry(Entry::from_object(key, &object)),
        other => ManifestItem::Skipped(format!("expected an object, found {}", json_kind(&other))),
    }
}

fn string_field(key: &str, object: &Map<String, Value>, field: &str) -> Option<String> {
    match object.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => {
            tracing::warn!(
                "Ignoring '{}' of manifest key '{}': expected a string, found {}",
                field,
                key,
                json_kind(other)
            );
            None
        }
    }
}

fn include_field(key: &str, object: &Map<String, Value>) -> Option<bool> {
    match object.get("sitemap_include")? {
        Value::Bool(b) => Some(*b),
        Value::Null => None,
        other => {
            tracing::warn!(
                "Ignoring 'sitemap_include' of manifest key '{}': expected a boolean, found {}; keeping the entry",
                key,
                json_kind(other)
            );
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
