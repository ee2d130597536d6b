use std::io::{self, Write};

use super::{DocumentEmitter, DocumentView};

/// Writes the filtered graph bundle as JSON for the renderer.
pub struct JsonEmitter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }
}

impl<W: Write> DocumentEmitter for JsonEmitter<W> {
    fn emit(&mut self, view: &DocumentView<'_>) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &view.graph)?;
        } else {
            serde_json::to_writer(&mut self.writer, &view.graph)?;
        }
        writeln!(self.writer)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
