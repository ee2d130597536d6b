//! Typed RDF statements produced by the Turtle parser.

use serde::{Deserialize, Serialize};

use super::vocab::{rdf, xsd};

/// Classifies the object of a [`Triple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    Uri,
    Literal,
    Blank,
}

impl std::fmt::Display for TermKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermKind::Uri => write!(f, "uri"),
            TermKind::Literal => write!(f, "literal"),
            TermKind::Blank => write!(f, "blank"),
        }
    }
}

/// An object-position term before it is flattened into a [`Triple`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Iri(String),
    /// Blank node, including its `_:` prefix.
    Blank(String),
    Literal {
        value: String,
        datatype: String,
        language: Option<String>,
    },
}

impl Term {
    pub fn iri(value: impl Into<String>) -> Self {
        Term::Iri(value.into())
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Term::Blank(label.into())
    }

    /// Plain string literal (`xsd:string`).
    pub fn literal(value: impl Into<String>) -> Self {
        Self::typed(value, xsd::STRING)
    }

    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            datatype: datatype.into(),
            language: None,
        }
    }

    /// Language-tagged string; the datatype is always `rdf:langString`.
    pub fn lang(value: impl Into<String>, tag: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            datatype: rdf::LANG_STRING.to_string(),
            language: Some(tag.into()),
        }
    }

    pub fn kind(&self) -> TermKind {
        match self {
            Term::Iri(_) => TermKind::Uri,
            Term::Blank(_) => TermKind::Blank,
            Term::Literal { .. } => TermKind::Literal,
        }
    }

    /// Lexical value: the IRI, the blank label or the literal's lexical form.
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(v) | Term::Blank(v) => v,
            Term::Literal { value, .. } => value,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Term::Iri(v) | Term::Blank(v) => v,
            Term::Literal { value, .. } => value,
        }
    }
}

/// One RDF statement.
///
/// `datatype` and `language` are only ever populated when `object_kind` is
/// [`TermKind::Literal`]; construct through [`Triple::new`] to keep that so.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    #[serde(rename = "objectType")]
    pub object_kind: TermKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Triple {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        let object_kind = object.kind();
        let (object, datatype, language) = match object {
            Term::Iri(v) | Term::Blank(v) => (v, None, None),
            Term::Literal {
                value,
                datatype,
                language,
            } => (value, Some(datatype), language),
        };
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
            object_kind,
            datatype,
            language,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.object_kind == TermKind::Literal
    }

    /// Case-insensitive substring match over subject, predicate and object.
    ///
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        [&self.subject, &self.predicate, &self.object]
            .iter()
            .any(|value| value.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iri_object_has_no_datatype() {
        let t = Triple::new("http://e/s", "http://e/p", Term::iri("http://e/o"));
        assert_eq!(t.object_kind, TermKind::Uri);
        assert_eq!(t.datatype, None);
        assert_eq!(t.language, None);
    }

    #[test]
    fn lang_literal_carries_lang_string_datatype() {
        let t = Triple::new("http://e/s", "http://e/p", Term::lang("chat", "fr"));
        assert_eq!(t.object_kind, TermKind::Literal);
        assert_eq!(t.datatype.as_deref(), Some(rdf::LANG_STRING));
        assert_eq!(t.language.as_deref(), Some("fr"));
    }

    #[test]
    fn serializes_with_object_type_field() {
        let t = Triple::new("http://e/s", "http://e/p", Term::blank("_:b0"));
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["objectType"], "blank");
        assert!(json.get("datatype").is_none());
    }
}
