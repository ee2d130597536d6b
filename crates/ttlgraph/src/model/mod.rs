pub mod graph;
pub mod triple;
pub mod vocab;
