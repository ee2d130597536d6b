//! Turns a triple sequence into a deduplicated node/edge bundle.

use std::collections::HashSet;

use crate::model::graph::{GraphBundle, GraphEdge, GraphNode, GraphSummary, NodeKind};
use crate::model::triple::{TermKind, Triple};

use super::label::shrink;

/// Reserved prefix that keeps literal node ids apart from IRIs.
pub const LITERAL_ID_PREFIX: &str = "literal::";

/// Node id for a term: IRIs and blank nodes use their raw value, literals are
/// tagged with [`LITERAL_ID_PREFIX`] so equal literal values share one node.
pub fn node_id(value: &str, kind: TermKind) -> String {
    match kind {
        TermKind::Literal => format!("{LITERAL_ID_PREFIX}{value}"),
        TermKind::Uri | TermKind::Blank => value.to_string(),
    }
}

/// Edge id, unique per position even for repeated triples.
pub fn edge_id(triple: &Triple, index: usize) -> String {
    format!(
        "{}-{}-{}-{}",
        triple.subject, triple.predicate, triple.object, index
    )
}

/// Accumulates nodes in first-seen order while skipping duplicates.
#[derive(Default)]
struct NodeSet {
    seen: HashSet<String>,
    nodes: Vec<GraphNode>,
}

impl NodeSet {
    fn ensure(&mut self, id: &str, value: &str, kind: NodeKind) {
        if self.seen.contains(id) {
            return;
        }
        self.seen.insert(id.to_string());
        self.nodes.push(GraphNode {
            id: id.to_string(),
            label: shrink(value, kind == NodeKind::Literal),
            kind,
            title: value.to_string(),
        });
    }
}

/// Build the renderable bundle for `triples`.
///
/// One edge per triple, in input order; nodes in the order they are first
/// referenced (subject before object).
pub fn build_bundle(triples: &[Triple]) -> GraphBundle {
    let mut nodes = NodeSet::default();
    let mut edges = Vec::with_capacity(triples.len());

    for (index, triple) in triples.iter().enumerate() {
        let subject_id = node_id(&triple.subject, TermKind::Uri);
        let object_id = node_id(&triple.object, triple.object_kind);

        nodes.ensure(&subject_id, &triple.subject, NodeKind::Resource);

        let object_kind = if triple.is_literal() {
            NodeKind::Literal
        } else {
            NodeKind::Resource
        };
        nodes.ensure(&object_id, &triple.object, object_kind);

        edges.push(GraphEdge {
            id: edge_id(triple, index),
            from: subject_id,
            to: object_id,
            label: shrink(&triple.predicate, false),
        });
    }

    GraphBundle {
        nodes: nodes.nodes,
        edges,
        summary: summarize(triples),
    }
}

/// Distinct-value counts per triple position, over raw lexical strings.
pub fn summarize(triples: &[Triple]) -> GraphSummary {
    let mut subjects = HashSet::new();
    let mut predicates = HashSet::new();
    let mut objects = HashSet::new();

    for triple in triples {
        subjects.insert(triple.subject.as_str());
        predicates.insert(triple.predicate.as_str());
        objects.insert(triple.object.as_str());
    }

    GraphSummary {
        triples: triples.len(),
        subjects: subjects.len(),
        predicates: predicates.len(),
        objects: objects.len(),
    }
}
