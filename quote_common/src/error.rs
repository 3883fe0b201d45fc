//! Error types shared by the quote model and the viewer.
//!
//! The `QuoteError` enum unifies the failure cases of the crates in this workspace:
//! I/O on snapshot and symbol files, JSON decoding, table configuration and the
//! quote sources, so each crate can propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the model and the viewer.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library, files or the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while parsing a symbols file into a list of symbols.
    #[error("Parse symbols file error: {0}")]
    ParseSymbolsFile(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Rejected table layout (e.g. no elastic column, zero base width).
    #[error("Invalid table layout: {0}")]
    Layout(String),

    /// A quote source could not produce a snapshot.
    #[error("Quote source error: {0}")]
    Source(String),
}
