use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::Section;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub content: ContentConfig,
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub sections: Vec<SectionLayout>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// Root directory of the content tree.
    pub root: PathBuf,
    /// Content file extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Glob patterns (relative to root) excluded from the scan.
    #[serde(default)]
    pub exclude_globs: Vec<String>,
}

fn default_extension() -> String {
    "mdx".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Path to the required-page inventory (TOML, keyed by slug).
    pub path: PathBuf,
}

/// Expected layout of one section directory, for the structure checks.
#[derive(Debug, Deserialize, Clone)]
pub struct SectionLayout {
    /// Directory name under the content root, e.g. `01-foundation`.
    pub dir: String,
    /// Section the directory holds; must be one of the closed section values.
    pub name: String,
    #[serde(default = "default_min_pages")]
    pub min_pages: usize,
}

fn default_min_pages() -> usize {
    1
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.content.extension.is_empty() || config.content.extension.starts_with('.') {
        anyhow::bail!(
            "content.extension must be a bare extension like \"mdx\", got '{}'",
            config.content.extension
        );
    }

    for layout in &config.sections {
        if layout.dir.is_empty() {
            anyhow::bail!("sections.dir must not be empty");
        }
        if Section::parse(&layout.name).is_none() {
            anyhow::bail!(
                "Unknown section name '{}' in [[sections]]. Must be one of: {}",
                layout.name,
                Section::ALL.map(|s| s.as_str()).join(", ")
            );
        }
        if layout.min_pages == 0 {
            anyhow::bail!("sections.min_pages must be >= 1 for '{}'", layout.dir);
        }
    }

    Ok(config)
}
