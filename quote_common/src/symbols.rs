//! Symbol lists for quote sources, read from files or CLI values.
//!
//! Symbols may be separated by commas, spaces, or new lines. They are upper-cased,
//! and duplicates are dropped so that a symbol stays unique within a snapshot.
use std::io::BufRead;

use crate::error::QuoteError;

/// Symbols shown when the user does not provide any.
pub const DEFAULT_SYMBOLS: [&str; 5] = ["AAPL", "MSFT", "GOOGL", "AMZN", "META"];

/// Trait providing file parsing for symbol lists.
pub trait SymbolParser {
    /// Parses symbols from a buffered reader.
    ///
    /// Returns an error if a token contains characters that cannot appear in a symbol.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<String>, QuoteError>;
}

/// Parser for plain-text symbol lists.
pub struct Symbols;

impl SymbolParser for Symbols {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<String>, QuoteError> {
        let mut symbols = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(QuoteError::Io)?;
            for token in tokens(&line) {
                let symbol = normalize_symbol(token)?;
                if !symbols.contains(&symbol) {
                    symbols.push(symbol);
                }
            }
        }
        Ok(symbols)
    }
}

/// Parses a single comma/space separated list such as `"aapl, msft"`.
pub fn parse_symbol_list(text: &str) -> Result<Vec<String>, QuoteError> {
    Symbols::parse_from_file(text.as_bytes())
}

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

fn normalize_symbol(token: &str) -> Result<String, QuoteError> {
    let valid = token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '/' | '^' | ':'));
    if !valid {
        return Err(QuoteError::ParseSymbolsFile(format!(
            "invalid symbol '{token}'"
        )));
    }
    Ok(token.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_spaces_and_lines() {
        let input = "aapl, msft\nGOOGL\n\n  brk.b,EUR/USD  \n";
        let symbols = Symbols::parse_from_file(input.as_bytes()).unwrap();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "GOOGL", "BRK.B", "EUR/USD"]);
    }

    #[test]
    fn drops_duplicates_keeping_first_position() {
        let symbols = parse_symbol_list("TSLA aapl TSLA AAPL").unwrap();
        assert_eq!(symbols, vec!["TSLA", "AAPL"]);
    }

    #[test]
    fn rejects_invalid_tokens() {
        let err = parse_symbol_list("AAPL $$$").unwrap_err();
        assert!(matches!(err, QuoteError::ParseSymbolsFile(_)));
    }
}
