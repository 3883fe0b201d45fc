//! Quote Viewer — an interactive terminal table of market quotes.
//!
//! It loads one snapshot, either from a JSON file saved from the pricing API or as
//! simulated quotes for a list of symbols, and lets the user move through it.
//!
//! Usage example (CLI):
//! ```bash
//! quote_view --snapshot ./quotes.json
//! quote_view --symbols AAPL,MSFT,NVDA --log-file ./quote_view.log
//! ```
//!
//! Keys: `↑`/`k` and `↓`/`j` move the selection, `h` toggles the help line, `q` or
//! `Ctrl+C` quits.
use std::fs::File;

use clap::Parser;
use log::info;
use quote_common::{QuoteError, Result};
use quote_view::args::Args;
use quote_view::terminal::{self, TerminalGuard};
use quote_view::view::QuoteView;

fn main() -> Result<(), QuoteError> {
    let args = Args::parse();
    init_logger(&args)?;

    let mut source = args.quote_source()?;
    info!("Quote source: {}", source.describe());

    let _guard = TerminalGuard::enter()?;
    let mut terminal = terminal::stdout_terminal()?;
    let mut view = QuoteView::default();
    terminal::run(&mut terminal, &mut view, source.as_mut())
}

fn init_logger(args: &Args) -> Result<()> {
    let log_file = File::create(args.log_path())?;
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}
