//! Schema validation against the required-page inventory.
//!
//! The inventory is the ground truth: every check here walks its entries in
//! order and accumulates violations without short-circuiting. A page missing
//! from the content tree is reported once by the existence check and skipped
//! by every downstream field check, so one absent file does not pile on
//! spurious "missing title" noise.

use std::collections::{BTreeMap, HashMap};

use crate::models::{Inventory, Page, Section};

/// All schema checks, concatenated in a fixed order.
pub fn check_all(pages: &[Page], inventory: &Inventory) -> Vec<String> {
    let mut violations = check_existence(pages, inventory);
    violations.extend(check_required_fields(pages, inventory));
    violations.extend(check_field_shapes(pages, inventory));
    violations.extend(check_sections(pages, inventory));
    violations.extend(check_order_uniqueness(pages, inventory));
    violations
}

/// Every inventory slug must resolve to a page on disk.
pub fn check_existence(pages: &[Page], inventory: &Inventory) -> Vec<String> {
    let by_slug = index_pages(pages);
    inventory
        .keys()
        .filter(|slug| !by_slug.contains_key(slug.as_str()))
        .map(|slug| format!("Missing required page: {}", slug))
        .collect()
}

/// `title`, `description`, `section`, and `order` must all be present.
/// Presence means the key exists in the frontmatter block — value shape is
/// judged separately, with no truthiness shortcuts.
pub fn check_required_fields(pages: &[Page], inventory: &Inventory) -> Vec<String> {
    let by_slug = index_pages(pages);
    let mut violations = Vec::new();

    for slug in inventory.keys() {
        let page = match by_slug.get(slug.as_str()) {
            Some(page) => page,
            None => continue,
        };
        for key in ["title", "description", "section", "order"] {
            if !page.has(key) {
                violations.push(format!("{}: missing {}", slug, key));
            }
        }
    }

    violations
}

/// Shape constraints on present fields: non-empty title, description length
/// within 10–200, order a positive integer.
pub fn check_field_shapes(pages: &[Page], inventory: &Inventory) -> Vec<String> {
    let by_slug = index_pages(pages);
    let mut violations = Vec::new();

    for slug in inventory.keys() {
        let page = match by_slug.get(slug.as_str()) {
            Some(page) => page,
            None => continue,
        };

        if let Some(title) = page.title() {
            if title.is_empty() {
                violations.push(format!("{}: title must not be empty", slug));
            }
        }

        if let Some(description) = page.description() {
            let len = description.chars().count();
            if !(10..=200).contains(&len) {
                violations.push(format!(
                    "{}: description length {} outside 10-200",
                    slug, len
                ));
            }
        }

        if page.has("order") {
            match page.order() {
                Some(order) if order >= 1 => {}
                Some(order) => {
                    violations.push(format!("{}: order must be positive, got {}", slug, order));
                }
                None => {
                    violations.push(format!("{}: order must be an integer", slug));
                }
            }
        }
    }

    violations
}

/// A present `section` must be one of the closed values, and must match the
/// section the inventory declares for the slug.
pub fn check_sections(pages: &[Page], inventory: &Inventory) -> Vec<String> {
    let by_slug = index_pages(pages);
    let mut violations = Vec::new();

    for (slug, required) in inventory {
        let page = match by_slug.get(slug.as_str()) {
            Some(page) => page,
            None => continue,
        };
        let claimed = match page.section() {
            Some(claimed) => claimed,
            None => continue,
        };
        match Section::parse(claimed) {
            None => {
                violations.push(format!("{}: invalid section \"{}\"", slug, claimed));
            }
            Some(section) if section != required.section => {
                violations.push(format!(
                    "{}: claims section \"{}\" but inventory declares \"{}\"",
                    slug, claimed, required.section
                ));
            }
            Some(_) => {}
        }
    }

    violations
}

/// Within each section — grouped by the inventory's declared section, not
/// the page's own claim — `order` values must contain no duplicates.
pub fn check_order_uniqueness(pages: &[Page], inventory: &Inventory) -> Vec<String> {
    let by_slug = index_pages(pages);
    let mut orders_by_section: BTreeMap<Section, Vec<i64>> = BTreeMap::new();

    for (slug, required) in inventory {
        let page = match by_slug.get(slug.as_str()) {
            Some(page) => page,
            None => continue,
        };
        if let Some(order) = page.order() {
            orders_by_section
                .entry(required.section)
                .or_default()
                .push(order);
        }
    }

    let mut violations = Vec::new();
    for (section, orders) in &orders_by_section {
        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for &order in orders {
            *counts.entry(order).or_insert(0) += 1;
        }
        let duplicates: Vec<String> = counts
            .iter()
            .filter(|(_, &count)| count > 1)
            .map(|(order, _)| order.to_string())
            .collect();
        if !duplicates.is_empty() {
            violations.push(format!(
                "Section \"{}\" has duplicate orders: {}",
                section,
                duplicates.join(", ")
            ));
        }
    }

    violations
}

fn index_pages<'a>(pages: &'a [Page]) -> HashMap<&'a str, &'a Page> {
    pages.iter().map(|page| (page.slug.as_str(), page)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::Value;
    use std::path::PathBuf;

    fn page(slug: &str, fields: &[(&str, Value)]) -> Page {
        let fm = fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        Page::new(slug.to_string(), PathBuf::new(), fm)
    }

    fn s(v: &str) -> Value {
        Value::Str(v.to_string())
    }

    fn full_page(slug: &str, section: &str, order: i64) -> Page {
        page(
            slug,
            &[
                ("title", s("A Title")),
                ("description", s("A description of workable length.")),
                ("section", s(section)),
                ("order", Value::Int(order)),
            ],
        )
    }

    fn inventory(entries: &[(&str, Section, i64)]) -> Inventory {
        entries
            .iter()
            .map(|(slug, section, order)| {
                (
                    slug.to_string(),
                    crate::models::RequiredPage {
                        section: *section,
                        order: *order,
                        title: "A Title".to_string(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_missing_page_reported_once_without_field_pile_on() {
        // Inventory lists a page that has no file
        let inv = inventory(&[("01-foundation/why-rag", Section::Foundation, 1)]);
        let pages: Vec<Page> = Vec::new();

        let violations = check_all(&pages, &inv);
        assert_eq!(
            violations,
            vec!["Missing required page: 01-foundation/why-rag"]
        );
    }

    #[test]
    fn test_required_fields_reported_per_key() {
        let inv = inventory(&[("a", Section::Foundation, 1)]);
        let pages = vec![page("a", &[("title", s("Only a title"))])];
        let violations = check_required_fields(&pages, &inv);
        assert_eq!(
            violations,
            vec!["a: missing description", "a: missing section", "a: missing order"]
        );
    }

    #[test]
    fn test_field_shapes() {
        let inv = inventory(&[("a", Section::Foundation, 1)]);
        let pages = vec![page(
            "a",
            &[
                ("title", s("")),
                ("description", s("too short")),
                ("order", s("2")),
            ],
        )];
        let violations = check_field_shapes(&pages, &inv);
        assert_eq!(
            violations,
            vec![
                "a: title must not be empty",
                "a: description length 9 outside 10-200",
                "a: order must be an integer",
            ]
        );
    }

    #[test]
    fn test_invalid_section_value() {
        let inv = inventory(&[("a", Section::Foundation, 1)]);
        let pages = vec![page("a", &[("section", s("appendix"))])];
        let violations = check_sections(&pages, &inv);
        assert_eq!(violations, vec!["a: invalid section \"appendix\""]);
    }

    #[test]
    fn test_section_claim_must_match_inventory() {
        let inv = inventory(&[("a", Section::Foundation, 1)]);
        let pages = vec![page("a", &[("section", s("synthesis"))])];
        let violations = check_sections(&pages, &inv);
        assert_eq!(
            violations,
            vec!["a: claims section \"synthesis\" but inventory declares \"foundation\""]
        );
    }

    #[test]
    fn test_duplicate_orders_within_section() {
        // Orders [1, 2, 2] must report the duplicate value 2
        let inv = inventory(&[
            ("a", Section::Foundation, 1),
            ("b", Section::Foundation, 2),
            ("c", Section::Foundation, 3),
        ]);
        let pages = vec![
            full_page("a", "foundation", 1),
            full_page("b", "foundation", 2),
            full_page("c", "foundation", 2),
        ];
        let violations = check_order_uniqueness(&pages, &inv);
        assert_eq!(
            violations,
            vec!["Section \"foundation\" has duplicate orders: 2"]
        );
    }

    #[test]
    fn test_duplicates_grouped_by_declared_section() {
        // Same order in different declared sections is fine
        let inv = inventory(&[
            ("a", Section::Foundation, 1),
            ("b", Section::Synthesis, 1),
        ]);
        let pages = vec![
            full_page("a", "foundation", 1),
            full_page("b", "synthesis", 1),
        ];
        assert!(check_order_uniqueness(&pages, &inv).is_empty());
    }

    #[test]
    fn test_dense_orders_pass_uniqueness() {
        // Five entries ordered 1..5
        let inv = inventory(&[
            ("s/p1", Section::RetrievalStrategies, 1),
            ("s/p2", Section::RetrievalStrategies, 2),
            ("s/p3", Section::RetrievalStrategies, 3),
            ("s/p4", Section::RetrievalStrategies, 4),
            ("s/p5", Section::RetrievalStrategies, 5),
        ]);
        let pages: Vec<Page> = (1..=5)
            .map(|i| full_page(&format!("s/p{}", i), "retrieval-strategies", i))
            .collect();
        assert!(check_order_uniqueness(&pages, &inv).is_empty());
    }

    #[test]
    fn test_clean_content_set_passes_all() {
        let inv = inventory(&[
            ("01-foundation/why-rag", Section::Foundation, 1),
            ("01-foundation/naive-rag", Section::Foundation, 2),
        ]);
        let pages = vec![
            full_page("01-foundation/why-rag", "foundation", 1),
            full_page("01-foundation/naive-rag", "foundation", 2),
        ];
        assert!(check_all(&pages, &inv).is_empty());
    }
}
