//! RDF vocabulary constants the Turtle reader needs.
//!
//! - `rdf:` prefix (http://www.w3.org/1999/02/22-rdf-syntax-ns#) -- `a`, collections, lang strings
//! - `xsd:` prefix (http://www.w3.org/2001/XMLSchema#) -- datatypes of plain, numeric and boolean literals

/// RDF core vocabulary (`rdf:` prefix)
pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// XML Schema datatypes (`xsd:` prefix)
pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
}

/// Prefix used for anonymous and labelled blank nodes.
pub const BLANK_NODE_PREFIX: &str = "_:";
