//! Command-line arguments for the quote viewer.
//!
//! This module defines the CLI interface using `clap` and picks the quote source the
//! arguments describe. See `main` for end-to-end usage.
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use quote_common::Result;
use quote_common::symbols::{DEFAULT_SYMBOLS, SymbolParser, Symbols, parse_symbol_list};

use crate::source::{JsonFileSource, QuoteSource, SyntheticSource};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON snapshot saved from the pricing API. Takes precedence over symbols.
    #[clap(long, env = "QUOTE_VIEW_SNAPSHOT")]
    pub snapshot: Option<String>,

    /// Symbols to simulate when no snapshot is given, comma separated.
    #[clap(long, value_delimiter = ',', env = "QUOTE_VIEW_SYMBOLS")]
    pub symbols: Vec<String>,

    /// Path to a text file with symbols to simulate.
    /// Symbols may be separated by commas, spaces, or new lines.
    #[clap(long)]
    pub symbols_file: Option<String>,

    /// Where to write the log; the terminal itself is taken by the UI.
    #[clap(long, env = "QUOTE_VIEW_LOG")]
    pub log_file: Option<String>,
}

impl Args {
    /// Snapshot file if given, otherwise simulated quotes for the requested symbols.
    pub fn quote_source(&self) -> Result<Box<dyn QuoteSource>> {
        if let Some(path) = &self.snapshot {
            return Ok(Box::new(JsonFileSource::new(normalize_path(path))));
        }
        Ok(Box::new(SyntheticSource::new(self.symbol_list()?)))
    }

    pub fn symbol_list(&self) -> Result<Vec<String>> {
        if let Some(path) = &self.symbols_file {
            let file = File::open(normalize_path(path))?;
            return Symbols::parse_from_file(BufReader::new(file));
        }
        if !self.symbols.is_empty() {
            return parse_symbol_list(&self.symbols.join(","));
        }
        Ok(DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect())
    }

    pub fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(path) => normalize_path(path),
            None => std::env::temp_dir().join("quote_view.log"),
        }
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("quote_view").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_builtin_symbols() {
        let args = Args {
            snapshot: None,
            symbols: Vec::new(),
            symbols_file: None,
            log_file: None,
        };
        assert_eq!(args.symbol_list().unwrap(), DEFAULT_SYMBOLS.to_vec());
    }

    #[test]
    fn symbols_flag_is_comma_delimited() {
        let args = parse(&["--symbols", "tsla,nvda", "--symbols", "ibm"]);
        assert_eq!(args.symbol_list().unwrap(), vec!["TSLA", "NVDA", "IBM"]);
    }

    #[test]
    fn symbols_file_wins_over_flag() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "aapl msft\nnflx").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = parse(&["--symbols", "IBM", "--symbols-file", &path]);
        assert_eq!(args.symbol_list().unwrap(), vec!["AAPL", "MSFT", "NFLX"]);
    }

    #[test]
    fn snapshot_selects_file_source() {
        let args = parse(&["--snapshot", "\"quotes.json\"", "--symbols", "IBM"]);
        let source = args.quote_source().unwrap();
        assert_eq!(source.describe(), "snapshot file quotes.json");

        let args = parse(&["--symbols", "IBM"]);
        let source = args.quote_source().unwrap();
        assert_eq!(source.describe(), "synthetic quotes for IBM");
    }

    #[test]
    fn normalizes_quoted_paths() {
        assert_eq!(normalize_path("  \"C:\\data\\q.json\" "), PathBuf::from("C:\\data\\q.json"));
        assert_eq!(normalize_path("plain.log"), PathBuf::from("plain.log"));
        assert_eq!(parse(&["--log-file", " app.log "]).log_path(), PathBuf::from("app.log"));
    }
}
