//! Errors raised while reading a Turtle document.

/// A Turtle document could not be read.
///
/// Every variant renders to a single human-readable message; callers that
/// only need "parse failed" can rely on `Display`.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Invalid token (bad character, unterminated string or IRI).
    #[error("{message}")]
    Lexer { position: usize, message: String },

    /// Unexpected token or structurally incomplete statement.
    #[error("{message}")]
    Syntax { position: usize, message: String },

    /// Prefixed name whose prefix was never declared.
    #[error("undefined prefix '{prefix}:' at line {line}, column {column}")]
    UndefinedPrefix {
        prefix: String,
        line: usize,
        column: usize,
    },
}

/// Result type for Turtle parsing.
pub type Result<T> = std::result::Result<T, ParseError>;

impl ParseError {
    pub fn lexer(position: usize, message: impl Into<String>) -> Self {
        Self::Lexer {
            position,
            message: message.into(),
        }
    }

    pub fn syntax(position: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            message: message.into(),
        }
    }

    /// Byte offset of the offending token, when known.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Lexer { position, .. } | ParseError::Syntax { position, .. } => {
                Some(*position)
            }
            ParseError::UndefinedPrefix { .. } => None,
        }
    }
}

/// Convert a byte position to (line, column), 1-indexed.
pub(crate) fn line_col(input: &str, position: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;

    for (i, c) in input.char_indices() {
        if i >= position {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    (line, col)
}

/// Render `message` with a source excerpt and a caret under `position`.
pub(crate) fn with_context(input: &str, position: usize, message: &str) -> String {
    let (line, col) = line_col(input, position);
    let line_content = input.lines().nth(line - 1).unwrap_or("");
    let pointer = " ".repeat(col.saturating_sub(1));
    format!("{message} at line {line}, column {col}\n  |\n{line} | {line_content}\n  | {pointer}^")
}
