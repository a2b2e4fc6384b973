//! datalot - Interactive dashboard for consolidating endpoint data.
//!
//! Fetches JSON data from the listed HTTP endpoints, consolidates it into
//! one table, and shows the data, per-column summary statistics and a bar
//! chart. The consolidated table can be written out as CSV.
//!
//! Usage:
//!   datalot                                  # start empty, add endpoints with `e`
//!   datalot https://api.example.com/a.json   # seed the list and fetch on start
//!   datalot --export-path out/data.csv URL   # choose the CSV destination

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use datalot::export::EXPORT_FILE_NAME;
use datalot::fetch::HttpSource;
use datalot::pipeline::parse_endpoints;
use datalot::tui::{App, AppState};

/// Interactive dashboard for consolidating endpoint data.
#[derive(Parser)]
#[command(name = "datalot", about = "Endpoint data consolidation dashboard", version)]
struct Args {
    /// Endpoint URLs to seed the list with. When present, they are fetched
    /// immediately on startup.
    #[arg(value_name = "URL")]
    endpoints: Vec<String>,

    /// Where the CSV export is written.
    #[arg(long, value_name = "PATH", default_value = EXPORT_FILE_NAME)]
    export_path: PathBuf,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only log errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber. Logs go to stderr so they do not
/// fight the alternate-screen TUI; default level is WARN to keep the
/// terminal clean unless asked otherwise.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("datalot={}", level).parse().expect("valid directive"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    // Each argument may itself be a newline-separated list, so a pasted
    // multi-line block works as a single quoted argument.
    let endpoints: Vec<String> = args
        .endpoints
        .iter()
        .flat_map(|arg| parse_endpoints(arg))
        .collect();

    let state = AppState::new(args.export_path, endpoints);
    let app = App::new(Box::new(HttpSource::new()), state);

    if let Err(e) = app.run() {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
