use std::ffi::OsStr;
use std::fs;
use std::path;

use anyhow::Context as _;

use crate::error::Result;

pub type DateTime = chrono::DateTime<chrono::FixedOffset>;

/// A piece of already-rendered content to syndicate.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub title: String,
    /// Path of the entry relative to the site root.
    pub permalink: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Rendered HTML.
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl Entry {
    pub fn new(title: impl Into<String>, permalink: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            permalink: permalink.into(),
            date: None,
            updated: None,
            summary: None,
            content: String::new(),
            tags: Vec::new(),
            external_url: None,
        }
    }
}

/// Load entries from a YAML or JSON list, newest first.
pub fn load(path: &path::Path) -> Result<Vec<Entry>> {
    log::debug!("Loading entries from {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read entries `{}`", path.display()))?;

    let ext = path.extension().unwrap_or_else(|| OsStr::new(""));
    let mut entries: Vec<Entry> = if ext == OsStr::new("json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse entries `{}`", path.display()))?
    } else if content.trim().is_empty() {
        Vec::new()
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse entries `{}`", path.display()))?
    };

    sort(&mut entries);
    log::debug!("Loaded {} entries", entries.len());
    Ok(entries)
}

/// Newest first; undated entries go last and keep their relative order.
pub fn sort(entries: &mut [Entry]) {
    entries.sort_by(|a, b| match (a.date, b.date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
