//! Presentation-side state: the most recent load and the active filters.
//!
//! The parser and bundle builder are pure; this is the one place that keeps
//! results between calls. A failed load always clears the previous document
//! so a stale graph is never shown as current.

use tracing::{debug, info};

use crate::bundle::{build_bundle, filter_bundle, TripleFilter};
use crate::model::graph::GraphBundle;
use crate::model::triple::Triple;
use crate::parser::{parse, ParseError};
use crate::sample::{SAMPLE_NAME, SAMPLE_TTL};

/// Display name for text loaded without one.
pub const UNNAMED_DOCUMENT: &str = "Untitled Turtle";

/// A successfully parsed document.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub name: String,
    pub triples: Vec<Triple>,
    pub bundle: GraphBundle,
}

#[derive(Debug, Default)]
pub struct Session {
    current: Option<LoadedDocument>,
    last_error: Option<String>,
    graph_query: String,
    table_query: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and make it the current document.
    ///
    /// On failure the previous document is dropped and the error message is
    /// kept for [`Session::error`]; reporting it is left to the caller. The graph filter is reset on every load.
    pub fn load_text(&mut self, text: &str, name: Option<&str>) -> Result<&LoadedDocument, ParseError> {
        let name = name.unwrap_or(UNNAMED_DOCUMENT);
        debug!(name, bytes = text.len(), "parsing turtle document");

        self.graph_query.clear();
        match parse(text) {
            Ok(triples) => {
                let bundle = build_bundle(&triples);
                info!(
                    name,
                    triples = bundle.summary.triples,
                    nodes = bundle.nodes.len(),
                    edges = bundle.edges.len(),
                    "loaded turtle document"
                );
                self.last_error = None;
                Ok(self.current.insert(LoadedDocument {
                    name: name.to_string(),
                    triples,
                    bundle,
                }))
            }
            Err(err) => {
                debug!(name, error = %err, "failed to parse turtle document");
                self.current = None;
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Load the built-in FOAF sample.
    pub fn load_sample(&mut self) -> Result<&LoadedDocument, ParseError> {
        self.load_text(SAMPLE_TTL, Some(SAMPLE_NAME))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn current(&self) -> Option<&LoadedDocument> {
        self.current.as_ref()
    }

    /// Message of the last failed load, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// One-line status for the file input area.
    pub fn status(&self) -> String {
        match &self.current {
            Some(doc) => format!("Loaded: {}", doc.name),
            None => "No file loaded yet".to_string(),
        }
    }

    pub fn graph_query(&self) -> &str {
        &self.graph_query
    }

    pub fn table_query(&self) -> &str {
        &self.table_query
    }

    pub fn set_graph_query(&mut self, query: impl Into<String>) {
        self.graph_query = query.into();
    }

    pub fn set_table_query(&mut self, query: impl Into<String>) {
        self.table_query = query.into();
    }

    /// The current bundle with the graph filter applied.
    pub fn graph_view(&self) -> Option<GraphBundle> {
        self.current
            .as_ref()
            .map(|doc| filter_bundle(&doc.bundle, &self.graph_query))
    }

    /// The current triples with the table filter applied.
    pub fn table_view(&self) -> Option<TripleFilter<'_>> {
        self.current
            .as_ref()
            .map(|doc| TripleFilter::apply(&doc.triples, &self.table_query))
    }
}
