//! Renderable graph model handed to the node/edge view.

use serde::{Deserialize, Serialize};

/// Visual category of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Resource,
    Literal,
}

/// One distinct term in the rendered graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Opaque identity key; see [`crate::bundle::node_id`].
    pub id: String,
    /// Shortened, human-readable form.
    pub label: String,
    pub kind: NodeKind,
    /// Untruncated original value.
    pub title: String,
}

/// One rendered relationship. There is exactly one edge per triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub label: String,
}

/// Aggregate counts over a triple sequence.
///
/// `subjects`, `predicates` and `objects` count distinct raw lexical strings,
/// so `objects` can differ from the number of object nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub triples: usize,
    pub subjects: usize,
    pub predicates: usize,
    pub objects: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphBundle {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub summary: GraphSummary,
}

impl GraphBundle {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
