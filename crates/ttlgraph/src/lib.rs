//! Turtle (RDF) ingestion for graph viewers.
//!
//! [`parser`] turns Turtle text into typed [`Triple`]s, [`bundle`] turns those
//! into a renderable [`GraphBundle`] and provides the filter views, and
//! [`session`] keeps the most recent load for a front end.

pub mod bundle;
pub mod config;
pub mod emitter;
pub mod model;
pub mod parser;
pub mod sample;
pub mod session;

pub use bundle::{build_bundle, filter_bundle, filter_triples};
pub use model::graph::{GraphBundle, GraphEdge, GraphNode, GraphSummary, NodeKind};
pub use model::triple::{Term, TermKind, Triple};
pub use parser::{parse, ParseError};
pub use session::Session;
