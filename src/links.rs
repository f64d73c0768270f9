//! Link-structure validation over the built content graph.
//!
//! Three independent checks: prerequisite acyclicity, referential integrity
//! of every cross-reference field, and completeness of the prev/next chain.
//! Each check accumulates violation strings and never short-circuits the
//! others; a single run surfaces every problem.

use crate::graph::ContentGraph;

/// All three checks, concatenated in a fixed order.
pub fn check_all(graph: &ContentGraph) -> Vec<String> {
    let mut violations = check_acyclic(graph);
    violations.extend(check_references(graph));
    violations.extend(check_chain(graph));
    violations
}

/// Depth-first cycle detection over the prerequisite graph.
///
/// Every node is a DFS root — not just nodes reachable from some arbitrary
/// start — so disjoint cycles are all found. The global `visited` set keeps
/// fully explored subgraphs from being re-walked; the `on_stack` set marks
/// the current recursion path, and reaching a node already on it closes a
/// cycle, reported as the path suffix from that node back to itself.
pub fn check_acyclic(graph: &ContentGraph) -> Vec<String> {
    let edges = graph.prerequisite_edges();
    let n = graph.len();
    let mut visited = vec![false; n];
    let mut on_stack = vec![false; n];
    let mut path = Vec::new();
    let mut violations = Vec::new();

    for start in 0..n {
        if !visited[start] {
            dfs(
                start,
                graph,
                &edges,
                &mut visited,
                &mut on_stack,
                &mut path,
                &mut violations,
            );
        }
    }

    violations
}

fn dfs(
    node: usize,
    graph: &ContentGraph,
    edges: &[Vec<usize>],
    visited: &mut [bool],
    on_stack: &mut [bool],
    path: &mut Vec<usize>,
    violations: &mut Vec<String>,
) {
    if on_stack[node] {
        let from = path.iter().position(|&p| p == node).unwrap_or(0);
        let mut cycle: Vec<&str> = path[from..]
            .iter()
            .map(|&idx| graph.node(idx).slug.as_str())
            .collect();
        cycle.push(graph.node(node).slug.as_str());
        violations.push(format!(
            "Circular prerequisite chain: {}",
            cycle.join(" -> ")
        ));
        return;
    }
    if visited[node] {
        return;
    }

    visited[node] = true;
    on_stack[node] = true;
    path.push(node);

    for &dep in &edges[node] {
        dfs(dep, graph, edges, visited, on_stack, path, violations);
    }

    path.pop();
    on_stack[node] = false;
}

/// Every slug referenced from `prerequisites`, `relatedPages`, `prev`, or
/// `next` must name an existing page. Checked per field, per referencing
/// page.
pub fn check_references(graph: &ContentGraph) -> Vec<String> {
    let mut violations = Vec::new();

    for node in graph.nodes() {
        for target in &node.prerequisites {
            if !graph.contains(target) {
                violations.push(format!(
                    "{}: prerequisite \"{}\" does not exist",
                    node.slug, target
                ));
            }
        }
    }

    for node in graph.nodes() {
        for target in &node.related {
            if !graph.contains(target) {
                violations.push(format!(
                    "{}: related page \"{}\" does not exist",
                    node.slug, target
                ));
            }
        }
    }

    for node in graph.nodes() {
        if let Some(prev) = &node.prev {
            if !graph.contains(prev) {
                violations.push(format!("{}: prev \"{}\" does not exist", node.slug, prev));
            }
        }
        if let Some(next) = &node.next {
            if !graph.contains(next) {
                violations.push(format!("{}: next \"{}\" does not exist", node.slug, next));
            }
        }
    }

    violations
}

/// Result of walking the prev/next chain from its unique start.
#[derive(Debug)]
pub enum ChainOutcome {
    /// Degenerate case: no pages yet, nothing to walk.
    NoPages,
    /// Zero or more than one page without a `prev` link; walk skipped.
    AmbiguousStart(usize),
    /// The walk revisited a slug before covering all pages.
    Cycle(String),
    /// The walk terminated; the path may or may not cover every page.
    Walked(Vec<usize>),
}

// Walk states: Walking carries the current node, the two terminal states
// end the loop.
enum ChainState {
    Walking(usize),
    CycleDetected(String),
    Complete,
}

/// Walk `next` links from the unique no-`prev` page.
pub fn walk_chain(graph: &ContentGraph) -> ChainOutcome {
    if graph.is_empty() {
        return ChainOutcome::NoPages;
    }

    let starts: Vec<usize> = (0..graph.len())
        .filter(|&idx| graph.node(idx).prev.is_none())
        .collect();
    if starts.len() != 1 {
        return ChainOutcome::AmbiguousStart(starts.len());
    }

    let mut seen = vec![false; graph.len()];
    let mut walked = Vec::new();
    let mut state = ChainState::Walking(starts[0]);

    loop {
        match state {
            ChainState::Walking(idx) => {
                if seen[idx] {
                    state = ChainState::CycleDetected(graph.node(idx).slug.clone());
                    continue;
                }
                seen[idx] = true;
                walked.push(idx);
                // A dangling next ends the walk; the integrity check owns
                // reporting the broken link itself.
                state = match graph.node(idx).next.as_deref().and_then(|s| graph.lookup(s)) {
                    Some(next_idx) => ChainState::Walking(next_idx),
                    None => ChainState::Complete,
                };
            }
            ChainState::CycleDetected(slug) => return ChainOutcome::Cycle(slug),
            ChainState::Complete => return ChainOutcome::Walked(walked),
        }
    }
}

/// The chain must form exactly one simple path covering every page.
pub fn check_chain(graph: &ContentGraph) -> Vec<String> {
    match walk_chain(graph) {
        ChainOutcome::NoPages => Vec::new(),
        ChainOutcome::AmbiguousStart(count) => vec![format!(
            "Expected exactly one page with no prev link, found {}",
            count
        )],
        ChainOutcome::Cycle(slug) => vec![format!("Cycle in prev/next chain at: {}", slug)],
        ChainOutcome::Walked(walked) => {
            if walked.len() != graph.len() {
                vec![format!(
                    "Linear chain covers {} of {} pages",
                    walked.len(),
                    graph.len()
                )]
            } else {
                Vec::new()
            }
        }
    }
}
