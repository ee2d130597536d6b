use ttlgraph::sample::SAMPLE_NAME;
use ttlgraph::session::{Session, UNNAMED_DOCUMENT};

#[test]
fn new_session_is_empty() {
    let session = Session::new();
    assert!(session.current().is_none());
    assert!(session.error().is_none());
    assert_eq!(session.status(), "No file loaded yet");
    assert!(session.graph_view().is_none());
    assert!(session.table_view().is_none());
}

#[test]
fn load_sample() {
    let mut session = Session::new();
    let doc = session.load_sample().unwrap();
    assert_eq!(doc.name, SAMPLE_NAME);
    assert_eq!(doc.triples.len(), 13);
    assert_eq!(doc.bundle.nodes.len(), 10);
    assert_eq!(session.status(), "Loaded: Sample graph.ttl");
}

#[test]
fn load_without_name_uses_placeholder() {
    let mut session = Session::new();
    let doc = session
        .load_text("<http://e/a> <http://e/p> <http://e/b> .", None)
        .unwrap();
    assert_eq!(doc.name, UNNAMED_DOCUMENT);
}

#[test]
fn failed_load_clears_previous_document() {
    let mut session = Session::new();
    session.load_sample().unwrap();

    let err = session.load_text("invalid content", Some("bad.ttl")).unwrap_err();
    assert!(session.current().is_none());
    assert_eq!(session.error(), Some(err.to_string().as_str()));
    assert!(session.graph_view().is_none());
}

#[test]
fn successful_load_clears_error() {
    let mut session = Session::new();
    assert!(session.load_text("invalid content", None).is_err());
    assert!(session.error().is_some());

    session.load_sample().unwrap();
    assert!(session.error().is_none());
}

#[test]
fn empty_document_is_a_success() {
    let mut session = Session::new();
    let doc = session
        .load_text("@prefix ex: <http://example.org/> .", Some("prefixes.ttl"))
        .unwrap();
    assert!(doc.triples.is_empty());
    assert!(doc.bundle.is_empty());
    assert!(session.error().is_none());
}

#[test]
fn views_apply_the_queries() {
    let mut session = Session::new();
    session.load_sample().unwrap();
    session.set_graph_query("knows");
    session.set_table_query("eve");

    assert_eq!(session.graph_view().unwrap().edges.len(), 3);
    assert_eq!(session.table_view().unwrap().counter(), "5/13 shown");
}

#[test]
fn new_load_resets_graph_query_only() {
    let mut session = Session::new();
    session.load_sample().unwrap();
    session.set_graph_query("knows");
    session.set_table_query("eve");

    session.load_sample().unwrap();
    assert_eq!(session.graph_query(), "");
    assert_eq!(session.table_query(), "eve");
    assert_eq!(session.graph_view().unwrap().edges.len(), 13);
}

#[test]
fn clear_forgets_everything() {
    let mut session = Session::new();
    session.load_sample().unwrap();
    session.set_table_query("eve");
    session.clear();
    assert!(session.current().is_none());
    assert_eq!(session.table_query(), "");
}
