//! Section-layout checks over the content tree.
//!
//! Driven by the `[[sections]]` table in the config: each declared section
//! directory must exist under the content root, hold at least its configured
//! minimum number of pages, and its pages' `order` values must form the
//! dense sequence 1..N. Nothing runs when no sections are declared.

use crate::config::{ContentConfig, SectionLayout};
use crate::models::Page;

/// All layout checks for every declared section, concatenated.
pub fn check_all(
    content: &ContentConfig,
    sections: &[SectionLayout],
    pages: &[Page],
) -> Vec<String> {
    let mut violations = Vec::new();
    for layout in sections {
        violations.extend(check_section(content, layout, pages));
    }
    violations
}

fn check_section(content: &ContentConfig, layout: &SectionLayout, pages: &[Page]) -> Vec<String> {
    let mut violations = Vec::new();

    if !content.root.join(&layout.dir).is_dir() {
        violations.push(format!("Missing section directory: {}", layout.dir));
        // Page-count and ordering are meaningless without the directory
        return violations;
    }

    let prefix = format!("{}/", layout.dir);
    let in_section: Vec<&Page> = pages
        .iter()
        .filter(|page| page.slug.starts_with(&prefix))
        .collect();

    if in_section.len() < layout.min_pages {
        violations.push(format!(
            "Section \"{}\" ({}): has {} pages, expected at least {}",
            layout.name,
            layout.dir,
            in_section.len(),
            layout.min_pages
        ));
    }

    let mut orders = Vec::new();
    for page in &in_section {
        match page.order() {
            Some(order) => orders.push(order),
            None => violations.push(format!("{}: missing or non-numeric order", page.slug)),
        }
    }

    // Dense ordering: sorted orders must be exactly 1..N
    orders.sort_unstable();
    for (i, &order) in orders.iter().enumerate() {
        let expected = (i + 1) as i64;
        if order != expected {
            violations.push(format!(
                "Section \"{}\": expected order {} but got {}",
                layout.name, expected, order
            ));
        }
    }

    violations
}
