pub mod json;
pub mod summary;
pub mod table;

use std::io;

use crate::bundle::TripleFilter;
use crate::model::graph::GraphBundle;
use crate::session::Session;

/// What an emitter renders: the current document with both filters applied.
#[derive(Debug)]
pub struct DocumentView<'a> {
    /// Display name of the loaded document.
    pub name: &'a str,
    /// Graph query after trimming; empty when the graph is unfiltered.
    pub graph_query: &'a str,
    pub graph: GraphBundle,
    pub table: TripleFilter<'a>,
}

impl<'a> DocumentView<'a> {
    /// Snapshot the session's current document, or `None` when nothing is loaded.
    pub fn from_session(session: &'a Session) -> Option<Self> {
        let doc = session.current()?;
        Some(Self {
            name: &doc.name,
            graph_query: session.graph_query().trim(),
            graph: session.graph_view()?,
            table: session.table_view()?,
        })
    }
}

/// Trait for writing a [`DocumentView`] in one output format.
pub trait DocumentEmitter {
    /// Write the view.
    fn emit(&mut self, view: &DocumentView<'_>) -> io::Result<()>;
    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;
}
