use std::io::{self, Write};

use super::{DocumentEmitter, DocumentView};

/// Writes the summary chips and the size of the filtered graph.
pub struct SummaryEmitter<W: Write> {
    writer: W,
}

impl<W: Write> SummaryEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> DocumentEmitter for SummaryEmitter<W> {
    fn emit(&mut self, view: &DocumentView<'_>) -> io::Result<()> {
        let summary = view.graph.summary;
        writeln!(self.writer, "Loaded: {}", view.name)?;
        for (label, value) in [
            ("Triples", summary.triples),
            ("Subjects", summary.subjects),
            ("Predicates", summary.predicates),
            ("Objects", summary.objects),
        ] {
            writeln!(self.writer, "{label:<12}{value}")?;
        }

        if !view.graph_query.is_empty() && view.graph.is_empty() {
            writeln!(self.writer, "No relationships match '{}'.", view.graph_query)
        } else {
            writeln!(
                self.writer,
                "Graph: {} nodes, {} edges",
                view.graph.nodes.len(),
                view.graph.edges.len()
            )
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
