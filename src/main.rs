//! Preview shim: a thin CLI over the portfolio core.
//!
//! Loads a store document, seeds the state machine from a query string the
//! way a page would from its address bar, optionally expands the pagination
//! window, and prints the resulting text view. Useful for eyeballing filter,
//! ordering, and curation behavior without a browser host.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pressdeck::observability::init_tracing;
use pressdeck::ui::render_text;
use pressdeck::{handle_event, initialize, ArticleStore, Config, Event};

/// Render a portfolio store the way the page core would.
#[derive(Debug, Parser)]
#[command(name = "pressdeck", version, about)]
struct Cli {
    /// Path to the store JSON document (articles plus optional curation table).
    store: PathBuf,

    /// Initial query string, e.g. "topics=Fraud,Growth&genre=Feature".
    #[arg(short, long, default_value = "")]
    query: String,

    /// Root under which default assets are resolved.
    #[arg(long, default_value = "assets")]
    asset_root: String,

    /// Results per pagination page.
    #[arg(long, default_value_t = 6)]
    page_size: usize,

    /// Number of show-more expansions to apply before printing.
    #[arg(long, default_value_t = 0)]
    more: u32,

    /// Tracing level (trace, debug, info, warn, error).
    #[arg(long)]
    trace_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pressdeck: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> pressdeck::Result<()> {
    let config = Config {
        asset_root: cli.asset_root,
        page_size: cli.page_size,
        trace_level: cli.trace_level,
        ..Config::default()
    };
    init_tracing(&config);

    let store = ArticleStore::from_path(&cli.store)?;
    let mut state = initialize(config, store, &cli.query);

    for _ in 0..cli.more {
        handle_event(&mut state, &Event::ShowMore)?;
    }

    print!("{}", render_text(&state.compute_viewmodel()));
    Ok(())
}
