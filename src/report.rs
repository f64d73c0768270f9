//! Validation runs and report rendering.
//!
//! Loads one snapshot of the content tree and the required-page inventory,
//! hands it to the validators, and renders the accumulated violations as a
//! summary table or JSON. Pass/fail is decided by emptiness of the combined
//! violation list, never by the first failure.

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::graph::ContentGraph;
use crate::links::{self, ChainOutcome};
use crate::models::{self, Inventory, Page};
use crate::{scan, schema, structure};

/// One validator's outcome.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub name: &'static str,
    pub violations: Vec<String>,
}

/// Full run over one content snapshot.
#[derive(Debug, Serialize)]
pub struct Report {
    pub pages: usize,
    pub checks: Vec<CheckReport>,
    pub pass: bool,
}

impl Report {
    pub fn violation_count(&self) -> usize {
        self.checks.iter().map(|c| c.violations.len()).sum()
    }
}

/// Everything the validators consume, loaded once per run.
struct Snapshot {
    pages: Vec<Page>,
    inventory: Inventory,
    graph: ContentGraph,
}

fn load_snapshot(config: &Config) -> Result<Snapshot> {
    let pages = scan::load_pages(&config.content)?;
    let inventory = models::load_inventory(&config.inventory.path)?;
    let graph = ContentGraph::build(&pages);
    Ok(Snapshot {
        pages,
        inventory,
        graph,
    })
}

/// Run every validator and assemble the report.
pub fn build_report(config: &Config) -> Result<Report> {
    let snapshot = load_snapshot(config)?;
    let Snapshot {
        pages,
        inventory,
        graph,
    } = &snapshot;

    let checks = vec![
        CheckReport {
            name: "schema/existence",
            violations: schema::check_existence(pages, inventory),
        },
        CheckReport {
            name: "schema/required-fields",
            violations: schema::check_required_fields(pages, inventory),
        },
        CheckReport {
            name: "schema/field-shapes",
            violations: schema::check_field_shapes(pages, inventory),
        },
        CheckReport {
            name: "schema/sections",
            violations: schema::check_sections(pages, inventory),
        },
        CheckReport {
            name: "schema/order-uniqueness",
            violations: schema::check_order_uniqueness(pages, inventory),
        },
        CheckReport {
            name: "links/acyclicity",
            violations: links::check_acyclic(graph),
        },
        CheckReport {
            name: "links/references",
            violations: links::check_references(graph),
        },
        CheckReport {
            name: "links/chain",
            violations: links::check_chain(graph),
        },
        CheckReport {
            name: "structure/layout",
            violations: structure::check_all(&config.content, &config.sections, pages),
        },
    ];

    let pass = checks.iter().all(|check| check.violations.is_empty());
    Ok(Report {
        pages: snapshot.pages.len(),
        checks,
        pass,
    })
}

/// Run the `check` command. Returns whether the content set passed.
pub fn run_check(config: &Config, format: &str) -> Result<bool> {
    let report = build_report(config)?;
    match format {
        "text" => print_report(&report),
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        other => anyhow::bail!("Unknown output format: '{}'. Must be text or json.", other),
    }
    Ok(report.pass)
}

fn print_report(report: &Report) {
    println!("Pagegraph — Validation Report");
    println!("=============================");
    println!();
    println!("  Pages found: {}", report.pages);
    println!();
    println!("  {:<26} {:>10}", "CHECK", "VIOLATIONS");
    println!("  {}", "-".repeat(38));
    for check in &report.checks {
        println!("  {:<26} {:>10}", check.name, check.violations.len());
    }

    for check in &report.checks {
        if check.violations.is_empty() {
            continue;
        }
        println!();
        println!("  {}:", check.name);
        for violation in &check.violations {
            println!("    - {}", violation);
        }
    }

    println!();
    if report.pass {
        println!("PASS");
    } else {
        println!("FAIL: {} violations", report.violation_count());
    }
}

/// Run one validator family and print its violations.
pub fn run_schema(config: &Config) -> Result<bool> {
    let snapshot = load_snapshot(config)?;
    let violations = schema::check_all(&snapshot.pages, &snapshot.inventory);
    print_violations("schema", &violations);
    Ok(violations.is_empty())
}

pub fn run_links(config: &Config) -> Result<bool> {
    let snapshot = load_snapshot(config)?;
    let violations = links::check_all(&snapshot.graph);
    print_violations("links", &violations);
    Ok(violations.is_empty())
}

pub fn run_structure(config: &Config) -> Result<bool> {
    let pages = scan::load_pages(&config.content)?;
    let violations = structure::check_all(&config.content, &config.sections, &pages);
    print_violations("structure", &violations);
    Ok(violations.is_empty())
}

fn print_violations(family: &str, violations: &[String]) {
    if violations.is_empty() {
        println!("{}: ok", family);
        return;
    }
    for violation in violations {
        println!("{}", violation);
    }
    println!();
    println!("{}: {} violations", family, violations.len());
}

/// Run the `pages` command: list the inventory and its on-disk status.
pub fn run_pages(config: &Config) -> Result<()> {
    let snapshot = load_snapshot(config)?;

    println!(
        "{:<44} {:<22} {:>5}  {:<8} TITLE",
        "SLUG", "SECTION", "ORDER", "STATUS"
    );
    println!("{}", "-".repeat(96));

    for (slug, required) in &snapshot.inventory {
        let status = if snapshot.graph.contains(slug) {
            "ok"
        } else {
            "missing"
        };
        println!(
            "{:<44} {:<22} {:>5}  {:<8} {}",
            slug, required.section, required.order, status, required.title
        );
    }

    // Pages on disk the inventory does not know about
    for page in &snapshot.pages {
        if !snapshot.inventory.contains_key(&page.slug) {
            println!(
                "{:<44} {:<22} {:>5}  {:<8} {}",
                page.slug,
                page.section().unwrap_or("-"),
                page.order().map(|o| o.to_string()).unwrap_or_default(),
                "extra",
                page.title().unwrap_or("-")
            );
        }
    }

    Ok(())
}

/// Run the `chain` command: print the linear reading path, or the chain
/// violations if no single path exists.
pub fn run_chain(config: &Config) -> Result<bool> {
    let snapshot = load_snapshot(config)?;

    match links::walk_chain(&snapshot.graph) {
        ChainOutcome::NoPages => {
            println!("No pages found.");
            Ok(true)
        }
        ChainOutcome::AmbiguousStart(count) => {
            println!("Expected exactly one page with no prev link, found {}", count);
            Ok(false)
        }
        ChainOutcome::Cycle(slug) => {
            println!("Cycle in prev/next chain at: {}", slug);
            Ok(false)
        }
        ChainOutcome::Walked(walked) => {
            for (i, &idx) in walked.iter().enumerate() {
                let slug = &snapshot.graph.node(idx).slug;
                let title = snapshot
                    .pages
                    .iter()
                    .find(|page| &page.slug == slug)
                    .and_then(|page| page.title())
                    .unwrap_or("-");
                println!("{:>3}. {:<44} {}", i + 1, slug, title);
            }
            if walked.len() != snapshot.graph.len() {
                println!();
                println!(
                    "Linear chain covers {} of {} pages",
                    walked.len(),
                    snapshot.graph.len()
                );
                return Ok(false);
            }
            Ok(true)
        }
    }
}
