//!
//! Common types and utilities shared by the quote viewer.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` snapshot record handed over by quote sources.
//! - `formatter` — display formatting for currency, percentages and large numbers.
//! - `symbols` — symbol list parsing for files and CLI values.
#![warn(missing_docs)]
pub mod error;
pub mod formatter;
pub mod quote;
pub mod result;
pub mod symbols;

pub use error::QuoteError;
pub use quote::{FiftyTwoWeek, Quote};
pub use result::Result;
