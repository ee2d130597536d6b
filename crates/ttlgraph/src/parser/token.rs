//! Lexical tokens of a Turtle document.

/// A token and the byte span it was read from.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `<...>` with escapes already decoded; may still be relative.
    Iri(String),
    /// `prefix:local`. Either part may be empty (`:x`, `ex:`, `:`).
    PrefixedName { prefix: String, local: String },
    /// `_:label`, stored without the `_:`.
    BlankNodeLabel(String),
    /// `[]`
    Anon,
    /// `()`
    Nil,

    /// Quoted string, unescaped.
    String(String),
    /// Numeric literals keep their lexical form.
    Integer(String),
    Decimal(String),
    Double(String),
    /// Language tag without the `@`.
    LangTag(String),

    KwPrefix,
    KwBase,
    KwSparqlPrefix,
    KwSparqlBase,
    KwA,
    KwTrue,
    KwFalse,

    Dot,
    Comma,
    Semicolon,
    DoubleCaret,
    LBracket,
    RBracket,
    LParen,
    RParen,

    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Iri(s) => write!(f, "<{s}>"),
            TokenKind::PrefixedName { prefix, local } => write!(f, "{prefix}:{local}"),
            TokenKind::BlankNodeLabel(s) => write!(f, "_:{s}"),
            TokenKind::Anon => write!(f, "[]"),
            TokenKind::Nil => write!(f, "()"),
            TokenKind::String(s) => write!(f, "\"{s}\""),
            TokenKind::Integer(s) | TokenKind::Decimal(s) | TokenKind::Double(s) => {
                write!(f, "{s}")
            }
            TokenKind::LangTag(s) => write!(f, "@{s}"),
            TokenKind::KwPrefix => write!(f, "@prefix"),
            TokenKind::KwBase => write!(f, "@base"),
            TokenKind::KwSparqlPrefix => write!(f, "PREFIX"),
            TokenKind::KwSparqlBase => write!(f, "BASE"),
            TokenKind::KwA => write!(f, "a"),
            TokenKind::KwTrue => write!(f, "true"),
            TokenKind::KwFalse => write!(f, "false"),
            TokenKind::Dot => write!(f, "'.'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::DoubleCaret => write!(f, "'^^'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}
