//! Single-page inspection.
//!
//! Resolves one slug to its content file and prints the parsed frontmatter
//! in its rendered normal form, followed by a short body preview.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::frontmatter;
use crate::scan;

const PREVIEW_LINES: usize = 6;

pub fn run_show(config: &Config, slug: &str) -> Result<()> {
    let (page, body) = match scan::read_page(&config.content, slug)? {
        Some(found) => found,
        None => bail!("page not found: {}", slug),
    };

    println!("Slug:  {}", page.slug);
    println!("File:  {}", page.path.display());
    println!();

    if page.frontmatter.is_empty() {
        println!("(no frontmatter block)");
    } else {
        print!("{}", frontmatter::render(&page.frontmatter));
    }

    let preview: Vec<&str> = body.trim().lines().take(PREVIEW_LINES).collect();
    if !preview.is_empty() {
        println!();
        for line in &preview {
            println!("{}", line);
        }
        if body.trim().lines().count() > PREVIEW_LINES {
            println!("...");
        }
    }

    Ok(())
}
