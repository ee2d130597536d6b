//! Graph bundle construction and the filtered views over it.

pub mod builder;
pub mod filter;
pub mod label;

pub use builder::{build_bundle, edge_id, node_id, summarize, LITERAL_ID_PREFIX};
pub use filter::{filter_bundle, filter_triples, TripleFilter};
pub use label::shrink;
