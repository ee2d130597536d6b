//! Substring filters over a bundle (graph view) and a triple slice (table view).
//!
//! Both are derived views: the input is never modified.

use std::collections::HashSet;

use crate::model::graph::{GraphBundle, GraphNode};
use crate::model::triple::Triple;

fn node_matches(node: &GraphNode, needle: &str) -> bool {
    node.label.to_lowercase().contains(needle) || node.title.to_lowercase().contains(needle)
}

/// Restrict `bundle` to the edges matching `query`.
///
/// An edge survives when its label contains the query or either endpoint's
/// label or title does. Nodes survive only as endpoints of surviving edges.
/// A blank query returns the bundle unchanged; a query matching no edge
/// returns empty node and edge lists. The summary always describes the full
/// document.
pub fn filter_bundle(bundle: &GraphBundle, query: &str) -> GraphBundle {
    let query = query.trim();
    if query.is_empty() {
        return bundle.clone();
    }
    let needle = query.to_lowercase();

    let matched_nodes: HashSet<&str> = bundle
        .nodes
        .iter()
        .filter(|node| node_matches(node, &needle))
        .map(|node| node.id.as_str())
        .collect();

    let edges: Vec<_> = bundle
        .edges
        .iter()
        .filter(|edge| {
            edge.label.to_lowercase().contains(&needle)
                || matched_nodes.contains(edge.from.as_str())
                || matched_nodes.contains(edge.to.as_str())
        })
        .cloned()
        .collect();

    let endpoints: HashSet<&str> = edges
        .iter()
        .flat_map(|edge| [edge.from.as_str(), edge.to.as_str()])
        .collect();

    let nodes = bundle
        .nodes
        .iter()
        .filter(|node| endpoints.contains(node.id.as_str()))
        .cloned()
        .collect();

    GraphBundle {
        nodes,
        edges,
        summary: bundle.summary,
    }
}

/// Triples whose subject, predicate or object contains `query`,
/// case-insensitively. An empty query keeps every triple.
pub fn filter_triples<'a>(triples: &'a [Triple], query: &str) -> Vec<&'a Triple> {
    if query.is_empty() {
        return triples.iter().collect();
    }
    let needle = query.to_lowercase();
    triples.iter().filter(|t| t.mentions(&needle)).collect()
}

/// Result of filtering the triple table, with the counts the table shows.
#[derive(Debug)]
pub struct TripleFilter<'a> {
    pub matches: Vec<&'a Triple>,
    pub total: usize,
}

impl<'a> TripleFilter<'a> {
    pub fn apply(triples: &'a [Triple], query: &str) -> Self {
        Self {
            matches: filter_triples(triples, query),
            total: triples.len(),
        }
    }

    pub fn shown(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// `"shown/total shown"`, e.g. `3/13 shown`.
    pub fn counter(&self) -> String {
        format!("{}/{} shown", self.shown(), self.total)
    }
}
