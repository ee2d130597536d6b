//! Output configuration shared by the CLI and the emitters.

use std::fmt;
use std::str::FromStr;

/// What the CLI writes for a loaded document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The (filtered) graph bundle as JSON.
    #[default]
    Json,
    /// The (filtered) triple table with its shown/total counter.
    Table,
    /// Summary chips and graph size.
    Summary,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "table" | "triples" => Ok(Self::Table),
            "summary" => Ok(Self::Summary),
            other => Err(format!(
                "Unknown format: {other}. Use 'json', 'table' or 'summary'."
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Options controlling how a loaded document is rendered.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Substring filter for the graph view (trimmed before use).
    pub graph_filter: String,
    /// Substring filter for the triple table (used as given).
    pub table_filter: String,
}
