//! # Pagegraph CLI (`pgc`)
//!
//! The `pgc` binary validates a documentation content tree against its
//! required-page inventory and graph invariants.
//!
//! ## Usage
//!
//! ```bash
//! pgc --config ./pagegraph.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `pgc check` | Run every validator and print a full report |
//! | `pgc schema` | Schema checks against the required-page inventory |
//! | `pgc links` | Cycle, reference, and chain checks |
//! | `pgc structure` | Section directory layout checks |
//! | `pgc pages` | List the inventory and its on-disk status |
//! | `pgc chain` | Print the linear reading path |
//! | `pgc show <slug>` | Show one page's frontmatter and body preview |
//!
//! Every validating command exits non-zero when its checks produce
//! violations, so `pgc check` slots directly into CI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pagegraph::{config, report, show};

/// Pagegraph CLI — a content-graph validator for structured documentation
/// sites.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/pagegraph.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "pgc",
    about = "Pagegraph — a content-graph validator for structured documentation sites",
    version,
    long_about = "Pagegraph scans a tree of frontmatter-bearing content files, builds the \
    prerequisite / related / prev-next graphs over them, and checks schema shape, prerequisite \
    acyclicity, referential integrity, chain completeness, and section layout, accumulating \
    every violation in a single run."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./pagegraph.toml`. The content root, file extension,
    /// required-page inventory path, and section layout are read from it.
    #[arg(long, global = true, default_value = "./pagegraph.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Run every validator and print a full report.
    ///
    /// Loads the content tree once, hands the same snapshot to the schema,
    /// link, and structure validators, and prints a per-check summary plus
    /// every accumulated violation.
    Check {
        /// Output format: text or json.
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Schema checks against the required-page inventory.
    ///
    /// Existence, required fields, field shapes, section validity, and
    /// per-section order uniqueness.
    Schema,

    /// Link-structure checks over the content graph.
    ///
    /// Prerequisite acyclicity, referential integrity of prerequisites /
    /// related pages / prev / next, and prev-next chain completeness.
    Links,

    /// Section directory layout checks.
    ///
    /// Each `[[sections]]` entry in the config must have its directory on
    /// disk, meet its minimum page count, and order its pages densely 1..N.
    Structure,

    /// List the required-page inventory and its on-disk status.
    ///
    /// Shows each inventory entry with its declared section, order, and
    /// title, flags missing pages, and appends content files the inventory
    /// does not know about.
    Pages,

    /// Print the linear reading path.
    ///
    /// Walks `next` links from the unique page with no `prev` and prints
    /// the ordered path; reports the chain violation instead when no single
    /// path exists.
    Chain,

    /// Show one page's parsed frontmatter and a body preview.
    Show {
        /// Page slug, e.g. `01-foundation/why-rag`.
        slug: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    let pass = match cli.command {
        Commands::Check { format } => report::run_check(&cfg, &format)?,
        Commands::Schema => report::run_schema(&cfg)?,
        Commands::Links => report::run_links(&cfg)?,
        Commands::Structure => report::run_structure(&cfg)?,
        Commands::Pages => {
            report::run_pages(&cfg)?;
            true
        }
        Commands::Chain => report::run_chain(&cfg)?,
        Commands::Show { slug } => {
            show::run_show(&cfg, &slug)?;
            true
        }
    };

    if !pass {
        std::process::exit(1);
    }

    Ok(())
}
