//! Turtle reader: text in, ordered triples out.
//!
//! ```
//! let triples = ttlgraph::parser::parse(
//!     "@prefix ex: <http://example.com/> .\nex:a ex:rel ex:b, ex:c .",
//! )
//! .unwrap();
//! assert_eq!(triples.len(), 2);
//! ```

pub mod chars;
pub mod error;
pub mod iri;
pub mod lexer;
pub mod token;
pub mod turtle;

pub use error::{ParseError, Result};
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
pub use turtle::{parse, TurtleParser, MAX_NESTING};
