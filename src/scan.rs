//! Content tree scanning and page loading.
//!
//! Walks the content root for files with the configured extension and derives
//! a slug per file from its relative path (separators preserved, extension
//! stripped), which makes the `NN-section/page-name` convention the slug
//! itself. An absent root is not an error here — it is an empty inventory,
//! and each check decides what an empty page set means.

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::config::ContentConfig;
use crate::frontmatter;
use crate::models::Page;

/// One content file found by the scan, before its frontmatter is read.
#[derive(Debug, Clone)]
pub struct PageFile {
    pub slug: String,
    pub path: PathBuf,
}

/// Enumerate content files under the root, sorted by slug for deterministic
/// ordering. Returns an empty list when the root does not exist.
pub fn list_pages(content: &ContentConfig) -> Result<Vec<PageFile>> {
    if !content.root.exists() {
        return Ok(Vec::new());
    }

    let exclude_set = build_globset(&content.exclude_globs)?;
    let suffix = format!(".{}", content.extension);

    let mut files = Vec::new();
    for entry in WalkDir::new(&content.root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(&content.root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().replace('\\', "/");

        if exclude_set.is_match(&rel_str) {
            continue;
        }
        if !rel_str.ends_with(&suffix) {
            continue;
        }

        let slug = rel_str[..rel_str.len() - suffix.len()].to_string();
        files.push(PageFile {
            slug,
            path: path.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.slug.cmp(&b.slug));

    Ok(files)
}

/// Scan the root and lift each file's frontmatter into a [`Page`].
pub fn load_pages(content: &ContentConfig) -> Result<Vec<Page>> {
    let mut pages = Vec::new();
    for file in list_pages(content)? {
        let text = std::fs::read_to_string(&file.path)
            .with_context(|| format!("Failed to read page: {}", file.path.display()))?;
        let fields = frontmatter::extract(&text);
        pages.push(Page::new(file.slug, file.path, fields));
    }
    Ok(pages)
}

/// Resolve one slug to its file and read it. `Ok(None)` when the file does
/// not exist.
pub fn read_page(content: &ContentConfig, slug: &str) -> Result<Option<(Page, String)>> {
    let path = content
        .root
        .join(format!("{}.{}", slug, content.extension));
    if !path.is_file() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read page: {}", path.display()))?;
    let fields = frontmatter::extract(&text);
    let body = frontmatter::body_of(&text).to_string();
    Ok(Some((Page::new(slug.to_string(), path, fields), body)))
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid exclude glob: {}", pattern))?;
        builder.add(glob);
    }
    builder.build().context("Failed to build exclude glob set")
}
