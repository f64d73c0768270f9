//! Content graph assembly.
//!
//! Builds the three edge relations over the page set — prerequisites,
//! related pages, and the prev/next chain — as an arena of nodes addressed
//! by index, with a slug→index map for lookups. Assembly only: cycle
//! detection, referential integrity, and chain checks live in [`crate::links`].

use std::collections::HashMap;

use crate::models::Page;

/// One page's outgoing references, with targets kept as raw slugs so that
/// dangling references survive into the integrity checks.
#[derive(Debug, Clone)]
pub struct Node {
    pub slug: String,
    pub prerequisites: Vec<String>,
    pub related: Vec<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Default)]
pub struct ContentGraph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl ContentGraph {
    /// Assemble the graph from loaded pages. Slugs are unique by
    /// construction (they are derived from file paths), so insertion
    /// order is the page order and every slug maps to one node.
    pub fn build(pages: &[Page]) -> ContentGraph {
        let mut graph = ContentGraph::default();
        for page in pages {
            let idx = graph.nodes.len();
            graph.index.insert(page.slug.clone(), idx);
            graph.nodes.push(Node {
                slug: page.slug.clone(),
                prerequisites: page.prerequisites().to_vec(),
                related: page.related_pages().to_vec(),
                prev: page.prev().map(str::to_string),
                next: page.next().map(str::to_string),
            });
        }
        graph
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    pub fn lookup(&self, slug: &str) -> Option<usize> {
        self.index.get(slug).copied()
    }

    /// Prerequisite adjacency resolved to arena indices. Dangling targets
    /// are dropped here; the integrity check reports them from the raw
    /// slug lists.
    pub fn prerequisite_edges(&self) -> Vec<Vec<usize>> {
        self.nodes
            .iter()
            .map(|node| {
                node.prerequisites
                    .iter()
                    .filter_map(|slug| self.lookup(slug))
                    .collect()
            })
            .collect()
    }
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

    fn list(items: &[&str]) -> Value {
        Value::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_build_indexes_all_pages() {
        let pages = vec![
            page("a", &[("next", Value::Str("b".into()))]),
            page("b", &[("prev", Value::Str("a".into()))]),
        ];
        let graph = ContentGraph::build(&pages);
        assert_eq!(graph.len(), 2);
        assert!(graph.contains("a"));
        assert!(graph.contains("b"));
        assert!(!graph.contains("c"));
        assert_eq!(graph.node(graph.lookup("a").unwrap()).next.as_deref(), Some("b"));
    }

    #[test]
    fn test_prerequisite_edges_resolve_indices() {
        let pages = vec![
            page("a", &[]),
            page("b", &[("prerequisites", list(&["a"]))]),
        ];
        let graph = ContentGraph::build(&pages);
        let edges = graph.prerequisite_edges();
        assert_eq!(edges[0], Vec::<usize>::new());
        assert_eq!(edges[1], vec![0]);
    }

    #[test]
    fn test_dangling_prerequisites_dropped_from_edges() {
        let pages = vec![page("a", &[("prerequisites", list(&["ghost", "a"]))])];
        let graph = ContentGraph::build(&pages);
        let edges = graph.prerequisite_edges();
        // ghost is dropped from adjacency but kept on the node for integrity
        assert_eq!(edges[0], vec![0]);
        assert_eq!(graph.node(0).prerequisites, vec!["ghost", "a"]);
    }
}
