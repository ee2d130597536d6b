//! Recursive-descent Turtle parser.
//!
//! Walks the token stream produced by [`tokenize`] and collects [`Triple`]s in
//! source order. Triples are only handed out once the whole document parsed.

use std::collections::{HashMap, HashSet};

use crate::model::triple::{Term, Triple};
use crate::model::vocab::{rdf, xsd, BLANK_NODE_PREFIX};

use super::error::{line_col, with_context, ParseError, Result};
use super::iri;
use super::lexer::{strip_bom, tokenize};
use super::token::{Token, TokenKind};

/// Deepest allowed nesting of `[ ... ]` and `( ... )` terms.
pub const MAX_NESTING: usize = 256;

/// Hands out fresh labels for anonymous blank nodes.
///
/// Labels written in the document are reserved up front so a generated label
/// never merges two unrelated nodes.
struct BlankNodeIds {
    next: usize,
    reserved: HashSet<String>,
}

impl BlankNodeIds {
    fn reserving(tokens: &[Token]) -> Self {
        let reserved = tokens
            .iter()
            .filter_map(|t| match &t.kind {
                TokenKind::BlankNodeLabel(label) => Some(label.clone()),
                _ => None,
            })
            .collect();
        Self { next: 0, reserved }
    }

    fn fresh(&mut self) -> String {
        loop {
            let label = format!("genid{}", self.next);
            self.next += 1;
            if !self.reserved.contains(&label) {
                return format!("{BLANK_NODE_PREFIX}{label}");
            }
        }
    }
}

/// Parser state for one document.
pub struct TurtleParser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    /// Prefix mappings (prefix -> namespace IRI)
    prefixes: HashMap<String, String>,
    base: Option<String>,
    blank_nodes: BlankNodeIds,
    /// Open `[ ... ]` / `( ... )` terms around the cursor.
    depth: usize,
    triples: Vec<Triple>,
}

impl<'a> TurtleParser<'a> {
    /// Tokenize `input`. Fails on the first lexical error.
    pub fn new(input: &'a str) -> Result<Self> {
        let input = strip_bom(input);
        let tokens = tokenize(input)?;
        let blank_nodes = BlankNodeIds::reserving(&tokens);
        Ok(Self {
            input,
            tokens,
            pos: 0,
            prefixes: HashMap::new(),
            base: None,
            blank_nodes,
            depth: 0,
            triples: Vec::new(),
        })
    }

    /// Parse every statement and return the triples in source order.
    pub fn parse(mut self) -> Result<Vec<Triple>> {
        while !self.is_at_end() {
            self.parse_statement()?;
        }
        Ok(self.triples)
    }

    // -----------------------------------------------------------------------
    // Token cursor
    // -----------------------------------------------------------------------

    fn is_at_end(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind)
    }

    fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<()> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        let message = format!("expected {expected}, found {}", token.kind);
        ParseError::syntax(token.start, with_context(self.input, token.start, &message))
    }

    fn enter_nested(&mut self) -> Result<()> {
        if self.depth >= MAX_NESTING {
            let start = self.current().start;
            let message =
                format!("blank node or collection nesting deeper than {MAX_NESTING} levels");
            return Err(ParseError::syntax(start, with_context(self.input, start, &message)));
        }
        self.depth += 1;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Directives
    // -----------------------------------------------------------------------

    fn parse_statement(&mut self) -> Result<()> {
        match self.current().kind {
            TokenKind::KwPrefix | TokenKind::KwSparqlPrefix => self.parse_prefix_directive(),
            TokenKind::KwBase | TokenKind::KwSparqlBase => self.parse_base_directive(),
            _ => self.parse_triples(),
        }
    }

    /// `@prefix ex: <iri> .` or `PREFIX ex: <iri>`
    fn parse_prefix_directive(&mut self) -> Result<()> {
        let sparql_style = matches!(self.current().kind, TokenKind::KwSparqlPrefix);
        self.advance();

        let prefix = match &self.current().kind {
            TokenKind::PrefixedName { prefix, local } if local.is_empty() => prefix.clone(),
            _ => return Err(self.unexpected("a prefix name such as 'ex:'")),
        };
        self.advance();

        let namespace = match &self.current().kind {
            TokenKind::Iri(raw) => self.resolve_iri(raw),
            _ => return Err(self.unexpected("a namespace IRI")),
        };
        self.advance();

        self.prefixes.insert(prefix, namespace);

        if !sparql_style {
            self.expect(&TokenKind::Dot, "'.' after @prefix")?;
        }
        Ok(())
    }

    /// `@base <iri> .` or `BASE <iri>`
    fn parse_base_directive(&mut self) -> Result<()> {
        let sparql_style = matches!(self.current().kind, TokenKind::KwSparqlBase);
        self.advance();

        let base = match &self.current().kind {
            TokenKind::Iri(raw) => self.resolve_iri(raw),
            _ => return Err(self.unexpected("a base IRI")),
        };
        self.advance();
        self.base = Some(base);

        if !sparql_style {
            self.expect(&TokenKind::Dot, "'.' after @base")?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Triples
    // -----------------------------------------------------------------------

    fn parse_triples(&mut self) -> Result<()> {
        if self.check(&TokenKind::LBracket) {
            // `[ ex:p ex:o ] .` is a complete statement on its own
            let subject = self.parse_blank_node_property_list()?;
            if !self.check(&TokenKind::Dot) {
                self.parse_predicate_object_list(&subject)?;
            }
        } else {
            let subject = self.parse_subject()?;
            self.parse_predicate_object_list(&subject)?;
        }

        self.expect(&TokenKind::Dot, "'.' to end the statement")
    }

    fn parse_subject(&mut self) -> Result<String> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Iri(raw) => {
                self.advance();
                Ok(self.resolve_iri(&raw))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(&prefix, &local, token.start)?;
                self.advance();
                Ok(iri)
            }
            TokenKind::BlankNodeLabel(label) => {
                self.advance();
                Ok(format!("{BLANK_NODE_PREFIX}{label}"))
            }
            TokenKind::Anon => {
                self.advance();
                Ok(self.blank_nodes.fresh())
            }
            TokenKind::LParen => Ok(self.parse_collection()?.into_value()),
            TokenKind::Nil => {
                self.advance();
                Ok(rdf::NIL.to_string())
            }
            _ => Err(self.unexpected("a subject")),
        }
    }

    fn parse_predicate_object_list(&mut self, subject: &str) -> Result<()> {
        loop {
            let predicate = self.parse_predicate()?;
            self.parse_object_list(subject, &predicate)?;

            if !self.check(&TokenKind::Semicolon) {
                break;
            }
            while self.check(&TokenKind::Semicolon) {
                self.advance();
            }
            // trailing `;` before `.` or `]` is allowed
            if !self.at_predicate() {
                break;
            }
        }
        Ok(())
    }

    fn at_predicate(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::Iri(_) | TokenKind::PrefixedName { .. } | TokenKind::KwA
        )
    }

    fn parse_predicate(&mut self) -> Result<String> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::KwA => {
                self.advance();
                Ok(rdf::TYPE.to_string())
            }
            TokenKind::Iri(_) | TokenKind::PrefixedName { .. } => self.parse_iri(),
            _ => Err(self.unexpected("a predicate")),
        }
    }

    fn parse_object_list(&mut self, subject: &str, predicate: &str) -> Result<()> {
        loop {
            let object = self.parse_object()?;
            self.triples.push(Triple::new(subject, predicate, object));

            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Term> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Iri(_) | TokenKind::PrefixedName { .. } => Ok(Term::Iri(self.parse_iri()?)),
            TokenKind::BlankNodeLabel(label) => {
                self.advance();
                Ok(Term::Blank(format!("{BLANK_NODE_PREFIX}{label}")))
            }
            TokenKind::Anon => {
                self.advance();
                Ok(Term::Blank(self.blank_nodes.fresh()))
            }
            TokenKind::LBracket => Ok(Term::Blank(self.parse_blank_node_property_list()?)),
            TokenKind::LParen => self.parse_collection(),
            TokenKind::Nil => {
                self.advance();
                Ok(Term::iri(rdf::NIL))
            }
            TokenKind::String(_)
            | TokenKind::Integer(_)
            | TokenKind::Decimal(_)
            | TokenKind::Double(_)
            | TokenKind::KwTrue
            | TokenKind::KwFalse => self.parse_literal(),
            _ => Err(self.unexpected("an object")),
        }
    }

    fn parse_literal(&mut self) -> Result<Term> {
        let token = self.current().clone();
        self.advance();
        match token.kind {
            TokenKind::String(value) => match self.current().kind.clone() {
                TokenKind::LangTag(tag) => {
                    self.advance();
                    Ok(Term::lang(value, tag))
                }
                TokenKind::DoubleCaret => {
                    self.advance();
                    if !matches!(
                        self.current().kind,
                        TokenKind::Iri(_) | TokenKind::PrefixedName { .. }
                    ) {
                        return Err(self.unexpected("a datatype IRI after '^^'"));
                    }
                    let datatype = self.parse_iri()?;
                    Ok(Term::typed(value, datatype))
                }
                _ => Ok(Term::literal(value)),
            },
            TokenKind::Integer(lexical) => Ok(Term::typed(lexical, xsd::INTEGER)),
            TokenKind::Decimal(lexical) => Ok(Term::typed(lexical, xsd::DECIMAL)),
            TokenKind::Double(lexical) => Ok(Term::typed(lexical, xsd::DOUBLE)),
            TokenKind::KwTrue => Ok(Term::typed("true", xsd::BOOLEAN)),
            TokenKind::KwFalse => Ok(Term::typed("false", xsd::BOOLEAN)),
            _ => Err(ParseError::syntax(token.start, "expected a literal")),
        }
    }

    /// `[ predicateObjectList? ]`, returning the new blank node.
    fn parse_blank_node_property_list(&mut self) -> Result<String> {
        self.enter_nested()?;
        self.expect(&TokenKind::LBracket, "'['")?;
        let node = self.blank_nodes.fresh();

        if !self.check(&TokenKind::RBracket) {
            self.parse_predicate_object_list(&node)?;
        }

        self.expect(&TokenKind::RBracket, "']' to close the blank node")?;
        self.depth -= 1;
        Ok(node)
    }

    /// `( object* )` as an `rdf:first` / `rdf:rest` chain.
    fn parse_collection(&mut self) -> Result<Term> {
        self.expect(&TokenKind::LParen, "'('")?;

        if self.check(&TokenKind::RParen) {
            self.advance();
            return Ok(Term::iri(rdf::NIL));
        }

        self.enter_nested()?;
        let head = self.blank_nodes.fresh();
        let mut cell = head.clone();

        loop {
            let item = self.parse_object()?;
            self.triples.push(Triple::new(cell.as_str(), rdf::FIRST, item));

            if self.check(&TokenKind::RParen) {
                self.triples
                    .push(Triple::new(cell.as_str(), rdf::REST, Term::iri(rdf::NIL)));
                break;
            }
            let next = self.blank_nodes.fresh();
            self.triples
                .push(Triple::new(cell.as_str(), rdf::REST, Term::Blank(next.clone())));
            cell = next;
        }

        self.expect(&TokenKind::RParen, "')' to close the collection")?;
        self.depth -= 1;
        Ok(Term::Blank(head))
    }

    // -----------------------------------------------------------------------
    // IRIs
    // -----------------------------------------------------------------------

    /// Consume an `<iri>` or prefixed-name token and return the absolute IRI.
    fn parse_iri(&mut self) -> Result<String> {
        let token = self.current().clone();
        let iri = match token.kind {
            TokenKind::Iri(raw) => self.resolve_iri(&raw),
            TokenKind::PrefixedName { prefix, local } => {
                self.expand_prefixed_name(&prefix, &local, token.start)?
            }
            _ => return Err(self.unexpected("an IRI")),
        };
        self.advance();
        Ok(iri)
    }

    /// Resolve against the current base; without a base the reference is
    /// kept as written.
    fn resolve_iri(&self, raw: &str) -> String {
        match &self.base {
            Some(base) => iri::resolve(base, raw),
            None => raw.to_string(),
        }
    }

    fn expand_prefixed_name(&self, prefix: &str, local: &str, position: usize) -> Result<String> {
        match self.prefixes.get(prefix) {
            Some(namespace) => Ok(format!("{namespace}{local}")),
            None => {
                let (line, column) = line_col(self.input, position);
                Err(ParseError::UndefinedPrefix {
                    prefix: prefix.to_string(),
                    line,
                    column,
                })
            }
        }
    }
}

/// Parse a complete Turtle document.
pub fn parse(input: &str) -> Result<Vec<Triple>> {
    TurtleParser::new(input)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::triple::TermKind;

    const EX: &str = "@prefix ex: <http://example.org/> .\n";

    fn parse_ex(body: &str) -> Vec<Triple> {
        parse(&format!("{EX}{body}")).unwrap()
    }

    #[test]
    fn semicolons_and_commas_expand() {
        let triples = parse_ex("ex:a ex:p ex:b, ex:c ; ex:q \"v\" .");
        assert_eq!(triples.len(), 3);
        assert!(triples.iter().all(|t| t.subject == "http://example.org/a"));
        assert_eq!(triples[1].object, "http://example.org/c");
        assert_eq!(triples[2].predicate, "http://example.org/q");
    }

    #[test]
    fn trailing_semicolons_are_allowed() {
        assert_eq!(parse_ex("ex:a ex:p ex:b ;; .").len(), 1);
    }

    #[test]
    fn a_is_rdf_type() {
        let triples = parse_ex("ex:a a ex:Thing .");
        assert_eq!(triples[0].predicate, rdf::TYPE);
    }

    #[test]
    fn labelled_blank_nodes_keep_their_label() {
        let triples = parse_ex("_:x ex:p _:y .");
        assert_eq!(triples[0].subject, "_:x");
        assert_eq!(triples[0].object, "_:y");
        assert_eq!(triples[0].object_kind, TermKind::Blank);
    }

    #[test]
    fn generated_blank_labels_avoid_document_labels() {
        let triples = parse_ex("_:genid0 ex:p [] .");
        assert_eq!(triples[0].object, "_:genid1");
    }

    #[test]
    fn nested_property_list_comes_first() {
        let triples = parse_ex("ex:a ex:knows [ ex:name \"Bob\" ] .");
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0].subject, "_:genid0");
        assert_eq!(triples[1].object, "_:genid0");
        assert_eq!(triples[1].object_kind, TermKind::Blank);
    }

    #[test]
    fn property_list_statement_without_predicates() {
        let triples = parse_ex("[ ex:p ex:o ] .");
        assert_eq!(triples.len(), 1);
    }

    #[test]
    fn collections_build_lists() {
        let triples = parse_ex("ex:a ex:list ( ex:b \"c\" ) .");
        // two cells (first + rest each) plus the linking triple
        assert_eq!(triples.len(), 5);
        assert_eq!(triples[3].object, rdf::NIL);
        assert_eq!(triples[4].object, "_:genid0");
        assert_eq!(parse_ex("ex:a ex:list () .")[0].object, rdf::NIL);
    }

    #[test]
    fn literal_datatypes() {
        let triples = parse_ex(
            "ex:a ex:s \"x\" ; ex:n 5 ; ex:d 1.5 ; ex:f 1e3 ; ex:b true ; ex:l \"y\"@en .",
        );
        let datatypes: Vec<_> = triples.iter().map(|t| t.datatype.as_deref()).collect();
        assert_eq!(
            datatypes,
            vec![
                Some(xsd::STRING),
                Some(xsd::INTEGER),
                Some(xsd::DECIMAL),
                Some(xsd::DOUBLE),
                Some(xsd::BOOLEAN),
                Some(rdf::LANG_STRING),
            ]
        );
        assert_eq!(triples[1].object, "5");
        assert_eq!(triples[5].language.as_deref(), Some("en"));
    }

    #[test]
    fn typed_literal_with_prefixed_datatype() {
        let triples = parse(
            "@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n\
             <http://e/s> <http://e/p> \"2024-01-01\"^^xsd:date .",
        )
        .unwrap();
        assert_eq!(
            triples[0].datatype.as_deref(),
            Some("http://www.w3.org/2001/XMLSchema#date")
        );
        assert_eq!(triples[0].language, None);
    }

    #[test]
    fn base_resolves_relative_iris() {
        let triples = parse(
            "@base <http://example.org/path/> .\n<alice> <name> \"Alice\" .\n<../bob> <name> \"Bob\" .",
        )
        .unwrap();
        assert_eq!(triples[0].subject, "http://example.org/path/alice");
        assert_eq!(triples[0].predicate, "http://example.org/path/name");
        assert_eq!(triples[1].subject, "http://example.org/bob");
    }

    #[test]
    fn relative_iri_without_base_is_kept() {
        let triples = parse("<a> <b> <c> .").unwrap();
        assert_eq!(triples[0].subject, "a");
    }

    #[test]
    fn sparql_style_directives() {
        let triples = parse("PREFIX ex: <http://example.org/>\nBASE <http://b.org/>\nex:a <p> ex:b .")
            .unwrap();
        assert_eq!(triples[0].predicate, "http://b.org/p");
    }

    #[test]
    fn undefined_prefix_is_reported() {
        let err = parse("ex:a ex:p ex:b .").unwrap_err();
        assert!(matches!(err, ParseError::UndefinedPrefix { ref prefix, .. } if prefix == "ex"));
        assert!(err.to_string().contains("undefined prefix 'ex:'"));
    }

    #[test]
    fn missing_dot_is_an_error() {
        let err = parse(&format!("{EX}ex:a ex:p ex:b")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("expected '.' to end the statement"), "{msg}");
        assert!(msg.contains("end of input"), "{msg}");
    }

    #[test]
    fn literal_subject_is_rejected() {
        let err = parse("\"x\" <http://e/p> <http://e/o> .").unwrap_err();
        assert!(err.to_string().contains("expected a subject"));
    }

    #[test]
    fn nesting_depth_resets_between_terms() {
        // many sibling nests, each shallow, never trip the limit
        let body = "ex:p [ ex:q [ ex:r ( ex:b ) ] ] ; ".repeat(MAX_NESTING * 2);
        let triples = parse_ex(&format!("ex:a {body}ex:s ex:t ."));
        assert_eq!(triples.len(), MAX_NESTING * 2 * 5 + 1);
    }

    #[test]
    fn datatype_must_be_an_iri() {
        assert!(parse("<http://e/s> <http://e/p> \"x\"^^\"y\" .").is_err());
    }
}
