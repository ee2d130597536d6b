use std::fs::{self, File};
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use ttlgraph::config::{OutputFormat, RenderOptions};
use ttlgraph::emitter::json::JsonEmitter;
use ttlgraph::emitter::summary::SummaryEmitter;
use ttlgraph::emitter::table::TableEmitter;
use ttlgraph::emitter::{DocumentEmitter, DocumentView};
use ttlgraph::Session;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "TTLGRAPH_LOG";

/// Parse a Turtle file into a graph bundle, triple table or summary.
#[derive(Parser)]
#[command(name = "ttlgraph", version, about)]
struct Cli {
    /// Turtle (.ttl) file to load.
    #[arg(required_unless_present = "sample", conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Load the built-in FOAF sample instead of a file.
    #[arg(long)]
    sample: bool,

    /// Output file path [default: stdout].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format: json, table, summary.
    #[arg(short, long, value_name = "FORMAT", default_value = "json")]
    format: String,

    /// Keep only graph edges (and their endpoints) matching this text.
    #[arg(long, value_name = "TEXT", default_value = "")]
    filter: String,

    /// Keep only table rows whose subject, predicate or object contain this text.
    #[arg(long, value_name = "TEXT", default_value = "")]
    table_filter: String,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default = if verbose {
        "ttlgraph=debug"
    } else if quiet {
        "ttlgraph=error"
    } else {
        "ttlgraph=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = RenderOptions {
        format: cli.format.parse::<OutputFormat>()?,
        pretty: cli.pretty,
        graph_filter: cli.filter,
        table_filter: cli.table_filter,
    };

    let mut session = Session::new();
    match &cli.input {
        Some(path) => {
            if path.extension().and_then(|ext| ext.to_str()) != Some("ttl") {
                warn!(path = %path.display(), "input does not have a .ttl extension; loading anyway");
            }
            debug!(path = %path.display(), "reading input");
            let text = fs::read_to_string(path)?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            session.load_text(&text, Some(&name))?;
        }
        None => {
            session.load_sample()?;
        }
    }

    session.set_graph_query(options.graph_filter.clone());
    session.set_table_query(options.table_filter.clone());
    let view = DocumentView::from_session(&session).ok_or("no document loaded")?;

    let output_writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    debug!(format = %options.format, "rendering");
    let mut emitter: Box<dyn DocumentEmitter> = match options.format {
        OutputFormat::Json => Box::new(JsonEmitter::new(output_writer, options.pretty)),
        OutputFormat::Table => Box::new(TableEmitter::new(output_writer)),
        OutputFormat::Summary => Box::new(SummaryEmitter::new(output_writer)),
    };
    emitter.emit(&view)?;
    emitter.flush()?;

    if !cli.quiet {
        eprintln!(
            "{}: {} triples, {} nodes, {} edges",
            session.status(),
            view.graph.summary.triples,
            view.graph.nodes.len(),
            view.graph.edges.len()
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
