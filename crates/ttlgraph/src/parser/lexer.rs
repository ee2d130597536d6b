//! Turtle lexer built on winnow.
//!
//! Produces the whole token stream up front and stops at the first lexical
//! error, so a malformed document never yields a partial token list.

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, delimited, opt, peek, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::stream::{AsChar, Location, Stream};
use winnow::token::{any, literal, one_of, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use super::chars::*;
use super::error::{with_context, ParseError, Result};
use super::token::{Token, TokenKind};

/// Input type for the lexer; tracks byte offsets for spans.
pub type Input<'a> = LocatingSlice<&'a str>;

pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    /// A leading byte order mark is skipped; positions are relative to the
    /// text after it.
    pub fn new(input: &'a str) -> Self {
        Self {
            input: strip_bom(input),
        }
    }

    /// Tokenize the entire input. The last token is always [`TokenKind::Eof`].
    pub fn tokenize(self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut input = LocatingSlice::new(self.input);

        loop {
            skip_ws_and_comments(&mut input);

            if input.is_empty() {
                let pos = input.current_token_start();
                tokens.push(Token::new(TokenKind::Eof, pos, pos));
                break;
            }

            let start = input.current_token_start();
            match next_token(&mut input) {
                Ok(kind) => {
                    let end = input.current_token_start();
                    tokens.push(Token::new(kind, start, end));
                }
                Err(_) => return Err(self.make_error(start)),
            }
        }

        Ok(tokens)
    }

    fn make_error(&self, position: usize) -> ParseError {
        let remaining = &self.input[position..];
        let bad_char = remaining.chars().next().unwrap_or('?');

        let message = match bad_char {
            '"' | '\'' => "unterminated or malformed string literal".to_string(),
            '<' => "invalid or unterminated IRI".to_string(),
            '@' => "invalid language tag or directive".to_string(),
            c if is_pn_chars_base(c) => {
                let word: String = remaining.chars().take_while(|c| is_pn_chars(*c)).collect();
                format!("unexpected word '{word}' (missing prefix or unknown keyword)")
            }
            c if !c.is_ascii() => format!(
                "unexpected character '{}' (U+{:04X})",
                c.escape_unicode(),
                c as u32
            ),
            c => format!("unexpected character '{c}'"),
        };

        ParseError::lexer(position, with_context(self.input, position, &message))
    }
}

/// Drop a leading UTF-8 byte order mark.
pub(crate) fn strip_bom(input: &str) -> &str {
    input.strip_prefix('\u{feff}').unwrap_or(input)
}

/// Tokenize a Turtle document.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}

fn backtrack() -> ErrMode<ContextError> {
    ErrMode::Backtrack(ContextError::new())
}

fn skip_ws_and_comments(input: &mut Input<'_>) {
    loop {
        let _: ModalResult<&str, ContextError> = take_while(0.., is_ws).parse_next(input);

        if input.starts_with('#') {
            let _: ModalResult<&str, ContextError> =
                take_till(0.., |c| c == '\n' || c == '\r').parse_next(input);
        } else {
            break;
        }
    }
}

fn next_token(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        parse_double_caret,
        parse_iri_ref,
        parse_blank_node_label,
        // `[]` and `()` must be tried before punctuation
        parse_anon,
        parse_nil,
        parse_at_word,
        parse_name,
        parse_string_literal,
        parse_number,
        parse_punctuation,
    ))
    .parse_next(input)
}

// ---------------------------------------------------------------------------
// IRIs
// ---------------------------------------------------------------------------

fn parse_iri_ref(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    delimited('<', parse_iri_content, '>')
        .map(TokenKind::Iri)
        .parse_next(input)
}

fn parse_iri_content(input: &mut Input<'_>) -> ModalResult<String> {
    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., is_iri_char).parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() || input.starts_with('>') {
            break;
        }

        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            result.push(parse_unicode_escape(input)?);
        } else {
            return Err(backtrack());
        }
    }

    Ok(result)
}

/// `\uXXXX` or `\UXXXXXXXX`, positioned after the backslash.
fn parse_unicode_escape(input: &mut Input<'_>) -> ModalResult<char> {
    let width: usize = match any.parse_next(input)? {
        'u' => 4,
        'U' => 8,
        _ => return Err(backtrack()),
    };
    let hex: &str = take_while(width..=width, AsChar::is_hex_digit).parse_next(input)?;
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(backtrack)
}

// ---------------------------------------------------------------------------
// Directives and language tags
// ---------------------------------------------------------------------------

fn parse_at_word(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    '@'.parse_next(input)?;

    // LANGTAG: [a-zA-Z]+ ('-' [a-zA-Z0-9]+)*
    let primary: &str = take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)?;
    let mut word = primary.to_string();
    while input.starts_with('-') {
        '-'.parse_next(input)?;
        let subtag: &str =
            take_while(1.., |c: char| c.is_ascii_alphanumeric()).parse_next(input)?;
        word.push('-');
        word.push_str(subtag);
    }
    if input.chars().next().is_some_and(|c| c.is_ascii_alphanumeric()) {
        return Err(backtrack());
    }

    Ok(match word.as_str() {
        "prefix" => TokenKind::KwPrefix,
        "base" => TokenKind::KwBase,
        _ => TokenKind::LangTag(word),
    })
}

// ---------------------------------------------------------------------------
// Prefixed names and bare keywords
// ---------------------------------------------------------------------------

/// `prefix:local`, `:local`, `prefix:`, or one of `a`, `true`, `false`,
/// `PREFIX`, `BASE`.
fn parse_name(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let start = input.checkpoint();
    let prefix = parse_pn_prefix(input)?;

    if opt(':').parse_next(input)?.is_some() {
        let local = opt(parse_pn_local).parse_next(input)?.unwrap_or_default();
        return Ok(TokenKind::PrefixedName { prefix, local });
    }

    match prefix.as_str() {
        "a" => Ok(TokenKind::KwA),
        "true" => Ok(TokenKind::KwTrue),
        "false" => Ok(TokenKind::KwFalse),
        w if w.eq_ignore_ascii_case("prefix") => Ok(TokenKind::KwSparqlPrefix),
        w if w.eq_ignore_ascii_case("base") => Ok(TokenKind::KwSparqlBase),
        _ => {
            input.reset(&start);
            Err(backtrack())
        }
    }
}

/// `PN_PREFIX`, possibly empty (the default prefix).
fn parse_pn_prefix(input: &mut Input<'_>) -> ModalResult<String> {
    let mut word = String::new();
    if !input.chars().next().is_some_and(is_pn_chars_base) {
        return Ok(word);
    }

    let first: char = any.parse_next(input)?;
    word.push(first);

    loop {
        let chunk: &str = take_while(0.., is_pn_chars).parse_next(input)?;
        word.push_str(chunk);

        // a dot only belongs to the name when more name characters follow it
        if input.starts_with('.') && input.as_ref()[1..].chars().next().is_some_and(is_pn_chars) {
            '.'.parse_next(input)?;
            word.push('.');
            continue;
        }
        break;
    }

    Ok(word)
}

/// `PN_LOCAL`, with `%XX` kept verbatim and `\` escapes decoded.
fn parse_pn_local(input: &mut Input<'_>) -> ModalResult<String> {
    let first_char = input.chars().next().ok_or_else(backtrack)?;
    if !is_pn_local_start(first_char) && first_char != '%' && first_char != '\\' {
        return Err(backtrack());
    }

    let mut result = String::new();

    loop {
        let chunk: &str =
            take_while(0.., |c: char| is_pn_chars(c) || c == ':').parse_next(input)?;
        result.push_str(chunk);

        if input.starts_with('.') {
            let continues = input.as_ref()[1..]
                .chars()
                .next()
                .is_some_and(|c| is_pn_chars(c) || matches!(c, ':' | '%' | '\\'));
            if continues {
                '.'.parse_next(input)?;
                result.push('.');
                continue;
            }
            break;
        }

        if input.starts_with('%') {
            '%'.parse_next(input)?;
            let hex: &str = take_while(2..=2, AsChar::is_hex_digit).parse_next(input)?;
            result.push('%');
            result.push_str(hex);
        } else if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            let escaped: char = any.parse_next(input)?;
            if !is_local_escapable(escaped) {
                return Err(backtrack());
            }
            result.push(escaped);
        } else {
            break;
        }
    }

    if result.is_empty() {
        return Err(backtrack());
    }

    Ok(result)
}

// ---------------------------------------------------------------------------
// Blank nodes
// ---------------------------------------------------------------------------

fn parse_blank_node_label(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    preceded("_:", parse_blank_node_name)
        .map(TokenKind::BlankNodeLabel)
        .parse_next(input)
}

fn parse_blank_node_name(input: &mut Input<'_>) -> ModalResult<String> {
    let first: char = one_of(|c: char| is_pn_chars_u(c) || c.is_ascii_digit()).parse_next(input)?;
    let mut name = String::from(first);

    loop {
        let chunk: &str = take_while(0.., is_pn_chars).parse_next(input)?;
        name.push_str(chunk);

        if input.starts_with('.') && input.as_ref()[1..].chars().next().is_some_and(is_pn_chars) {
            '.'.parse_next(input)?;
            name.push('.');
            continue;
        }
        break;
    }

    Ok(name)
}

fn parse_anon(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ('[', take_while(0.., is_ws), ']')
        .map(|_| TokenKind::Anon)
        .parse_next(input)
}

fn parse_nil(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ('(', take_while(0.., is_ws), ')')
        .map(|_| TokenKind::Nil)
        .parse_next(input)
}

// ---------------------------------------------------------------------------
// String literals
// ---------------------------------------------------------------------------

/// Short or long string in either quote style.
fn parse_string_literal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let quote = match input.chars().next() {
        Some(c @ ('"' | '\'')) => c,
        _ => return Err(backtrack()),
    };
    let long_delim = if quote == '"' { "\"\"\"" } else { "'''" };

    let value = if input.starts_with(long_delim) {
        literal(long_delim).parse_next(input)?;
        let value = parse_string_content(input, quote, true)?;
        literal(long_delim).parse_next(input)?;
        value
    } else {
        one_of(quote).parse_next(input)?;
        let value = parse_string_content(input, quote, false)?;
        one_of(quote).parse_next(input)?;
        value
    };

    Ok(TokenKind::String(value))
}

/// Body of a string up to (not including) its closing delimiter.
///
/// Short strings may not contain raw line breaks; long strings may contain
/// lone quote characters.
fn parse_string_content(input: &mut Input<'_>, quote: char, long: bool) -> ModalResult<String> {
    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., move |c: char| {
            c != quote && c != '\\' && (long || (c != '\n' && c != '\r'))
        })
        .parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() {
            break;
        }

        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            result.push(parse_string_escape(input)?);
        } else if long && input.starts_with(quote) {
            // up to two quotes may precede the closing delimiter
            let run = input.chars().take_while(|&c| c == quote).count();
            let content = match run {
                1 | 2 => run,
                3..=5 => run - 3,
                _ => return Err(backtrack()),
            };
            let quotes: &str =
                take_while(content..=content, move |c: char| c == quote).parse_next(input)?;
            result.push_str(quotes);
            if run >= 3 {
                break;
            }
        } else {
            break;
        }
    }

    Ok(result)
}

/// `ECHAR` or `UCHAR`, positioned after the backslash.
fn parse_string_escape(input: &mut Input<'_>) -> ModalResult<char> {
    if matches!(peek(any).parse_next(input)?, 'u' | 'U') {
        return parse_unicode_escape(input);
    }

    let c: char = any.parse_next(input)?;
    match c {
        't' => Ok('\t'),
        'b' => Ok('\x08'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\x0C'),
        '"' => Ok('"'),
        '\'' => Ok('\''),
        '\\' => Ok('\\'),
        _ => Err(backtrack()),
    }
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

fn parse_number(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((parse_double, parse_decimal, parse_integer)).parse_next(input)
}

fn parse_double(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    (
        opt(one_of(['+', '-'])),
        alt((
            (digit1, '.', digit0).take(),
            ('.', digit1).take(),
            digit1,
        )),
        one_of(['e', 'E']),
        opt(one_of(['+', '-'])),
        digit1,
    )
        .take()
        .map(|s: &str| TokenKind::Double(s.to_string()))
        .parse_next(input)
}

fn parse_decimal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    (opt(one_of(['+', '-'])), digit0, '.', digit1)
        .take()
        .map(|s: &str| TokenKind::Decimal(s.to_string()))
        .parse_next(input)
}

fn parse_integer(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    (opt(one_of(['+', '-'])), digit1)
        .take()
        .map(|s: &str| TokenKind::Integer(s.to_string()))
        .parse_next(input)
}

// ---------------------------------------------------------------------------
// Punctuation
// ---------------------------------------------------------------------------

fn parse_double_caret(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "^^".map(|_| TokenKind::DoubleCaret).parse_next(input)
}

fn parse_punctuation(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    any.verify_map(|c| match c {
        '.' => Some(TokenKind::Dot),
        ',' => Some(TokenKind::Comma),
        ';' => Some(TokenKind::Semicolon),
        '[' => Some(TokenKind::LBracket),
        ']' => Some(TokenKind::RBracket),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        _ => None,
    })
    .parse_next(input)
}
