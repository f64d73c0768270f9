//! Core data models for the content graph.
//!
//! A [`Page`] is a loosely-typed view over one content document's frontmatter:
//! fields are `Option`s and lists coerce to empty when absent or mistyped,
//! because deciding whether a field is missing or malformed is the job of the
//! validators, not the loader.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::frontmatter::{Frontmatter, Value};

/// The closed set of learning sections a page can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Foundation,
    RetrievalStrategies,
    GraphRag,
    Synthesis,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Foundation,
        Section::RetrievalStrategies,
        Section::GraphRag,
        Section::Synthesis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Foundation => "foundation",
            Section::RetrievalStrategies => "retrieval-strategies",
            Section::GraphRag => "graph-rag",
            Section::Synthesis => "synthesis",
        }
    }

    pub fn parse(s: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|sec| sec.as_str() == s)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One content page: its slug, file path, and extracted frontmatter.
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub path: PathBuf,
    pub frontmatter: Frontmatter,
}

impl Page {
    pub fn new(slug: String, path: PathBuf, frontmatter: Frontmatter) -> Page {
        Page {
            slug,
            path,
            frontmatter,
        }
    }

    /// Key presence in the frontmatter block, regardless of value type.
    pub fn has(&self, key: &str) -> bool {
        self.frontmatter.contains_key(key)
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    /// The page's claimed section, unvalidated.
    pub fn section(&self) -> Option<&str> {
        self.str_field("section")
    }

    pub fn order(&self) -> Option<i64> {
        match self.frontmatter.get("order") {
            Some(Value::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn prerequisites(&self) -> &[String] {
        self.list_field("prerequisites")
    }

    pub fn related_pages(&self) -> &[String] {
        self.list_field("relatedPages")
    }

    pub fn tags(&self) -> &[String] {
        self.list_field("tags")
    }

    pub fn prev(&self) -> Option<&str> {
        self.str_field("prev")
    }

    pub fn next(&self) -> Option<&str> {
        self.str_field("next")
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        match self.frontmatter.get(key) {
            Some(Value::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    // Absent or non-list values coerce to empty.
    fn list_field(&self, key: &str) -> &[String] {
        match self.frontmatter.get(key) {
            Some(Value::List(items)) => items,
            _ => &[],
        }
    }
}

/// One entry of the required-page inventory: the externally maintained
/// ground truth the schema validator checks against.
#[derive(Debug, Clone, Deserialize)]
pub struct RequiredPage {
    pub section: Section,
    pub order: i64,
    pub title: String,
}

/// Required-page inventory keyed by slug. `BTreeMap` keeps iteration order
/// deterministic so violation output is stable across runs.
pub type Inventory = BTreeMap<String, RequiredPage>;

/// Load the required-page inventory from a TOML file.
///
/// Unlike the content tree, the inventory is the ground truth everything
/// else is judged against, so absence or a parse failure here is fatal
/// rather than a violation.
pub fn load_inventory(path: &Path) -> Result<Inventory> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read required-page inventory: {}", path.display()))?;

    let inventory: Inventory = toml::from_str(&content)
        .with_context(|| format!("Failed to parse required-page inventory: {}", path.display()))?;

    if inventory.is_empty() {
        anyhow::bail!("Required-page inventory is empty: {}", path.display());
    }

    for (slug, required) in &inventory {
        if required.order < 1 {
            anyhow::bail!(
                "Inventory entry '{}' has non-positive order {}",
                slug,
                required.order
            );
        }
    }

    Ok(inventory)
}
