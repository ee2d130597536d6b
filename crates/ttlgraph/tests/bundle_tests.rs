use ttlgraph::bundle::{build_bundle, shrink, summarize};
use ttlgraph::parser::parse;
use ttlgraph::sample::SAMPLE_TTL;
use ttlgraph::{NodeKind, Term, Triple};

const EX: &str = "@prefix ex: <http://example.org/> .\n";

fn parse_ex(body: &str) -> Vec<Triple> {
    parse(&format!("{EX}{body}")).unwrap()
}

#[test]
fn single_triple_bundle() {
    let triples = parse(r#"<http://example.com/> <http://example.com/r> "v" ."#).unwrap();
    let bundle = build_bundle(&triples);
    assert_eq!(bundle.summary.triples, 1);
    assert_eq!(bundle.nodes.len(), 2);
    assert_eq!(bundle.edges.len(), 1);

    let edge = &bundle.edges[0];
    assert_eq!(edge.from, "http://example.com/");
    assert_eq!(edge.to, "literal::v");
    assert_eq!(edge.label, "r");
    assert_eq!(edge.id, "http://example.com/-http://example.com/r-v-0");

    let subject = bundle.node("http://example.com/").unwrap();
    assert_eq!(subject.kind, NodeKind::Resource);
    assert_eq!(subject.label, "http://example.com/");
    let literal = bundle.node("literal::v").unwrap();
    assert_eq!(literal.kind, NodeKind::Literal);
    assert_eq!(literal.title, "v");
}

#[test]
fn distinct_iris_give_two_nodes_per_triple() {
    let triples: Vec<_> = (0..5)
        .map(|i| {
            Triple::new(
                format!("http://e/s{i}"),
                format!("http://e/p{i}"),
                Term::iri(format!("http://e/o{i}")),
            )
        })
        .collect();
    let bundle = build_bundle(&triples);
    assert_eq!(bundle.nodes.len(), 10);
    assert_eq!(bundle.edges.len(), 5);
}

#[test]
fn equal_literals_share_one_node() {
    let bundle = build_bundle(&parse_ex(r#"ex:a ex:p "x" . ex:b ex:q "x" ."#));
    let literal_nodes: Vec<_> = bundle
        .nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Literal)
        .collect();
    assert_eq!(literal_nodes.len(), 1);
    assert_eq!(literal_nodes[0].id, "literal::x");
    assert_eq!(bundle.edges.len(), 2);
    assert_eq!(bundle.nodes.len(), 3);
}

#[test]
fn repeated_triple_keeps_both_edges() {
    let bundle = build_bundle(&parse_ex("ex:a ex:p ex:b .\nex:a ex:p ex:b ."));
    assert_eq!(bundle.nodes.len(), 2);
    assert_eq!(bundle.edges.len(), 2);
    assert_ne!(bundle.edges[0].id, bundle.edges[1].id);
    assert!(bundle.edges[1].id.ends_with("-1"));
}

#[test]
fn nodes_appear_in_first_reference_order() {
    let bundle = build_bundle(&parse_ex("ex:a ex:p ex:b .\nex:c ex:p ex:a ."));
    let ids: Vec<_> = bundle.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "http://example.org/a",
            "http://example.org/b",
            "http://example.org/c"
        ]
    );
}

#[test]
fn object_reused_as_subject_stays_one_node() {
    let bundle = build_bundle(&parse_ex("ex:a ex:p ex:b .\nex:b ex:p ex:c ."));
    assert_eq!(bundle.nodes.len(), 3);
}

#[test]
fn blank_nodes_are_resources() {
    let bundle = build_bundle(&parse_ex("ex:a ex:knows [ ex:name \"Bob\" ] ."));
    let blank = bundle.node("_:genid0").unwrap();
    assert_eq!(blank.kind, NodeKind::Resource);
    assert_eq!(blank.label, "_:genid0");
}

#[test]
fn long_literal_label_is_shortened_but_title_is_not() {
    let value = "a very long literal value exceeding limit";
    let bundle = build_bundle(&parse_ex(&format!("ex:a ex:p \"{value}\" .")));
    let node = bundle.node(&format!("literal::{value}")).unwrap();
    assert_eq!(node.label, "a very long literal v…");
    assert_eq!(node.title, value);
}

#[test]
fn label_examples() {
    assert_eq!(shrink("http://example.com/foaf#name", false), "name");
    assert_eq!(shrink("http://example.com/", false), "http://example.com/");
    assert_eq!(
        shrink("a very long literal value exceeding limit", true),
        "a very long literal v…"
    );
}

#[test]
fn sample_summary_counts() {
    let triples = parse(SAMPLE_TTL).unwrap();
    let bundle = build_bundle(&triples);
    assert_eq!(bundle.summary.triples, 13);
    assert_eq!(bundle.summary.subjects, 4);
    assert_eq!(bundle.summary.predicates, 4);
    assert_eq!(bundle.summary.objects, 9);
    assert_eq!(bundle.nodes.len(), 10);
    assert_eq!(bundle.edges.len(), 13);
}

#[test]
fn summary_counts_raw_strings_not_nodes() {
    // an IRI and a literal spelled the same: two nodes, one distinct object
    let triples = vec![
        Triple::new("http://e/a", "http://e/p", Term::iri("same")),
        Triple::new("http://e/a", "http://e/q", Term::literal("same")),
    ];
    let summary = summarize(&triples);
    assert_eq!(summary.objects, 1);
    assert_eq!(build_bundle(&triples).nodes.len(), 3);
}

#[test]
fn empty_input_gives_empty_bundle() {
    let bundle = build_bundle(&[]);
    assert!(bundle.is_empty());
    assert_eq!(bundle.summary.triples, 0);
}

#[test]
fn bundle_serializes_for_the_renderer() {
    let bundle = build_bundle(&parse_ex("ex:a ex:p \"x\" ."));
    let json = serde_json::to_value(&bundle).unwrap();
    assert_eq!(json["nodes"][1]["kind"], "literal");
    assert_eq!(json["nodes"][1]["id"], "literal::x");
    assert_eq!(json["edges"][0]["from"], "http://example.org/a");
    assert_eq!(json["summary"]["triples"], 1);
}
