use std::io::{self, Write};

use super::{DocumentEmitter, DocumentView};

const HEADERS: [&str; 3] = ["Subject", "Predicate", "Object"];

/// Writes the filtered triple table as aligned columns, followed by the
/// `shown/total shown` counter.
pub struct TableEmitter<W: Write> {
    writer: W,
}

impl<W: Write> TableEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_row(&mut self, cells: [&str; 3], widths: [usize; 3]) -> io::Result<()> {
        let [s, p, o] = cells;
        let line = format!(
            "{s:<sw$}  {p:<pw$}  {o}",
            sw = widths[0],
            pw = widths[1]
        );
        writeln!(self.writer, "{}", line.trim_end())
    }
}

impl<W: Write> DocumentEmitter for TableEmitter<W> {
    fn emit(&mut self, view: &DocumentView<'_>) -> io::Result<()> {
        if view.table.is_empty() {
            writeln!(self.writer, "No triples match this query.")?;
        } else {
            let mut widths = HEADERS.map(|h| h.chars().count());
            for t in &view.table.matches {
                widths[0] = widths[0].max(t.subject.chars().count());
                widths[1] = widths[1].max(t.predicate.chars().count());
                widths[2] = widths[2].max(t.object.chars().count());
            }
            self.write_row(HEADERS, widths)?;
            for t in &view.table.matches {
                let cells = [t.subject.as_str(), t.predicate.as_str(), t.object.as_str()];
                self.write_row(cells, widths)?;
            }
        }
        writeln!(self.writer, "{}", view.table.counter())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
