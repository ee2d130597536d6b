//! Built-in demo document.

/// Display name used when the sample is loaded.
pub const SAMPLE_NAME: &str = "Sample graph.ttl";

/// A small FOAF graph: four people/projects, thirteen triples.
pub const SAMPLE_TTL: &str = r#"@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix ex: <http://example.com/> .

ex:Alice a foaf:Person ;
  foaf:name "Alice" ;
  foaf:knows ex:Bob, ex:Eve ;
  foaf:topic_interest ex:GraphTech .

ex:Bob a foaf:Person ;
  foaf:name "Bob" ;
  foaf:knows ex:Eve .

ex:Eve a foaf:Person ;
  foaf:name "Eve" ;
  foaf:topic_interest ex:GraphTech .

ex:GraphTech a foaf:Project ;
  foaf:name "Graph Tooling" .
"#;
