use proptest::prelude::*;

use ttlgraph::bundle::{build_bundle, filter_bundle, shrink};
use ttlgraph::parser::parse;
use ttlgraph::{NodeKind, Term, Triple};

fn local_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}"
}

/// Triples over a small vocabulary so terms repeat.
fn triples() -> impl Strategy<Value = Vec<Triple>> {
    let object = prop_oneof![
        local_name().prop_map(|n| Term::iri(format!("http://e/{n}"))),
        "[a-zA-Z ]{0,30}".prop_map(Term::literal),
    ];
    prop::collection::vec((local_name(), local_name(), object), 0..20).prop_map(|rows| {
        rows.into_iter()
            .map(|(s, p, o)| Triple::new(format!("http://e/{s}"), format!("http://e/{p}"), o))
            .collect()
    })
}

proptest! {
    #[test]
    fn literal_labels_never_exceed_the_limit(value in "\\PC{0,60}") {
        let label = shrink(&value, true);
        prop_assert!(label.chars().count() <= 24);
        if value.chars().count() <= 24 {
            prop_assert_eq!(label, value);
        } else {
            prop_assert!(label.ends_with('…'));
        }
    }

    #[test]
    fn resource_labels_are_suffixes(value in "[a-z:/#.]{0,40}") {
        let label = shrink(&value, false);
        prop_assert!(value.ends_with(&label));
        prop_assert!(!label.is_empty() || value.is_empty());
    }

    #[test]
    fn one_edge_per_triple_and_unique_node_ids(triples in triples()) {
        let bundle = build_bundle(&triples);
        prop_assert_eq!(bundle.edges.len(), triples.len());
        prop_assert_eq!(bundle.summary.triples, triples.len());

        let mut ids: Vec<_> = bundle.nodes.iter().map(|n| &n.id).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), bundle.nodes.len());

        for edge in &bundle.edges {
            prop_assert!(bundle.node(&edge.from).is_some());
            let to = bundle.node(&edge.to);
            prop_assert!(to.is_some());
        }
        for node in &bundle.nodes {
            prop_assert_eq!(node.kind == NodeKind::Literal, node.id.starts_with("literal::"));
        }
    }

    #[test]
    fn filtered_bundle_is_a_subset(triples in triples(), query in "[a-z]{0,3}") {
        let bundle = build_bundle(&triples);
        let filtered = filter_bundle(&bundle, &query);
        prop_assert!(filtered.edges.iter().all(|e| bundle.edges.contains(e)));
        prop_assert!(filtered.nodes.iter().all(|n| bundle.nodes.contains(n)));
        prop_assert_eq!(filtered.summary, bundle.summary);
        if query.is_empty() {
            prop_assert_eq!(filtered, bundle);
        }
    }

    #[test]
    fn expanded_object_lists_count_every_object(objects in prop::collection::vec(local_name(), 1..8)) {
        let list = objects
            .iter()
            .map(|o| format!("<http://e/{o}>"))
            .collect::<Vec<_>>()
            .join(" , ");
        let doc = format!("<http://e/s> <http://e/p> {list} ;\n  <http://e/q> \"x\" .");
        let parsed = parse(&doc).unwrap();
        prop_assert_eq!(parsed.len(), objects.len() + 1);
    }
}
