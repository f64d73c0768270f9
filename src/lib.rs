//! # Pagegraph
//!
//! A content-graph validator for structured documentation sites.
//!
//! Pagegraph treats a tree of frontmatter-bearing content files as a directed
//! graph — prerequisite edges, related-page edges, and a linear prev/next
//! chain — and checks a fixed set of invariants over it: schema shape against
//! a required-page inventory, prerequisite acyclicity, referential integrity
//! of every cross-reference, single-chain completeness, and section layout.
//!
//! Every run is a pure function from "set of content files" to "set of
//! violations": nothing is mutated, nothing is cached between runs, and
//! violations are accumulated strings rather than raised errors so a single
//! run surfaces every problem.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐   ┌─────────────┐   ┌──────────────┐
//! │   Scan   │──▶│ Frontmatter │──▶│ ContentGraph │
//! │ (walk fs)│   │  extraction │   │   (arena)    │
//! └──────────┘   └─────────────┘   └──────┬───────┘
//!                                         │
//!                      ┌──────────────────┼──────────────────┐
//!                      ▼                  ▼                  ▼
//!                ┌──────────┐       ┌──────────┐       ┌───────────┐
//!                │  schema  │       │  links   │       │ structure │
//!                └──────────┘       └──────────┘       └───────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Pages, sections, and the required-page inventory |
//! | [`frontmatter`] | Line-oriented metadata block parser |
//! | [`scan`] | Content tree enumeration and page loading |
//! | [`graph`] | Content graph assembly |
//! | [`schema`] | Schema validation against the inventory |
//! | [`links`] | Cycle, reference, and chain validation |
//! | [`structure`] | Section directory layout checks |
//! | [`report`] | Validation runs and report rendering |
//! | [`show`] | Single-page inspection |

pub mod config;
pub mod frontmatter;
pub mod graph;
pub mod links;
pub mod models;
pub mod report;
pub mod scan;
pub mod schema;
pub mod show;
pub mod structure;
