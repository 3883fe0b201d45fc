//! Quote sources: where the viewer's snapshot comes from.
//!
//! - `JsonFileSource` reads a snapshot saved from the pricing API. The document may be
//!   an array of quotes, a single quote, or a batch object keyed by symbol; batch
//!   entries reporting an error, and entries that are not quote objects, are skipped.
//! - `SyntheticSource` makes up a plausible snapshot for a list of symbols using a
//!   small random walk, which is handy for demos and for running without data.
//!
//! A source is consulted once at startup; its result is handed to `QuoteView::load`.
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use log::{info, warn};
use quote_common::{FiftyTwoWeek, Quote, QuoteError, Result};
use rand::Rng;
use serde_json::Value;

/// Number of random-walk ticks between the open and the close of a synthetic quote.
const TICKS_PER_SESSION: usize = 30;

/// Producer of a quote snapshot.
pub trait QuoteSource {
    /// Fetches a snapshot, in the order the quotes should be displayed.
    fn fetch(&mut self) -> Result<Vec<Quote>>;

    /// Short description used in logs.
    fn describe(&self) -> String;
}

/// Snapshot stored as JSON on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl QuoteSource for JsonFileSource {
    fn fetch(&mut self) -> Result<Vec<Quote>> {
        let file = File::open(&self.path)?;
        let document: Value = serde_json::from_reader(BufReader::new(file))?;
        let quotes = parse_snapshot(document)?;
        info!("Read {} quotes from {}", quotes.len(), self.path.display());
        Ok(quotes)
    }

    fn describe(&self) -> String {
        format!("snapshot file {}", self.path.display())
    }
}

/// Decodes a snapshot document, keeping document order.
pub fn parse_snapshot(document: Value) -> Result<Vec<Quote>> {
    let mut quotes = Vec::new();
    match document {
        Value::Array(entries) => {
            for entry in entries {
                quotes.extend(decode_entry(None, entry));
            }
        }
        Value::Object(map) if map.contains_key("symbol") || map.contains_key("status") => {
            quotes.extend(decode_entry(None, Value::Object(map)));
        }
        Value::Object(map) => {
            for (symbol, entry) in map {
                quotes.extend(decode_entry(Some(&symbol), entry));
            }
        }
        other => {
            return Err(QuoteError::Format(format!(
                "expected a quote, a list of quotes or a batch object, got {other}"
            )));
        }
    }
    Ok(quotes)
}

fn decode_entry(key: Option<&str>, entry: Value) -> Option<Quote> {
    if entry.get("status").and_then(Value::as_str) == Some("error") {
        let message = entry
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("no message");
        warn!("Skipping {}: {}", key.unwrap_or("entry"), message);
        return None;
    }

    let mut quote: Quote = match serde_json::from_value(entry) {
        Ok(quote) => quote,
        Err(err) => {
            warn!("Skipping {}: {err}", key.unwrap_or("entry"));
            return None;
        }
    };
    if quote.symbol.is_empty() {
        if let Some(key) = key {
            quote.symbol = key.to_string();
        }
    }
    Some(quote)
}

/// Made-up quotes following a random walk around a random previous close.
pub struct SyntheticSource {
    symbols: Vec<String>,
}

impl SyntheticSource {
    pub fn new(symbols: Vec<String>) -> Self {
        Self { symbols }
    }

    /// Next price of the walk: a uniform move within one percent, never below one cent.
    pub fn next_price(current_price: f64) -> f64 {
        let mut rng = rand::rng();
        let change: f64 = rng.random_range(-0.01..0.01);
        let new_price = current_price * (1.0 + change);
        new_price.max(0.01)
    }

    /// Generates one session for `symbol`, stamped with `now`.
    pub fn generate(symbol: &str, now: DateTime<Utc>) -> Quote {
        let mut rng = rand::rng();
        let previous_close: f64 = rng.random_range(20.0..500.0);
        let open = Self::next_price(previous_close);

        let (mut high, mut low, mut close) = (open, open, open);
        for _ in 0..TICKS_PER_SESSION {
            close = Self::next_price(close);
            high = high.max(close);
            low = low.min(close);
        }

        let volume: u64 = match symbol {
            "AAPL" | "MSFT" | "TSLA" => rng.random_range(20_000_000..80_000_000),
            _ => rng.random_range(1_000_000..20_000_000),
        };

        let year_low = low.min(previous_close) * rng.random_range(0.6..0.95);
        let year_high = high.max(previous_close) * rng.random_range(1.05..1.4);
        let change = close - previous_close;

        Quote {
            symbol: symbol.to_string(),
            name: format!("{symbol} (simulated)"),
            exchange: "NASDAQ".to_string(),
            mic_code: "XNGS".to_string(),
            currency: "USD".to_string(),
            datetime: now.format("%Y-%m-%d").to_string(),
            timestamp: now.timestamp(),
            open: format!("{open:.5}"),
            high: format!("{high:.5}"),
            low: format!("{low:.5}"),
            close: format!("{close:.5}"),
            volume: volume.to_string(),
            previous_close: format!("{previous_close:.5}"),
            change: format!("{change:.5}"),
            percent_change: format!("{:.5}", change / previous_close * 100.0),
            average_volume: (volume / 10 * 9).to_string(),
            is_market_open: is_us_session(now),
            fifty_two_week: FiftyTwoWeek {
                low: format!("{year_low:.5}"),
                high: format!("{year_high:.5}"),
                low_change: format!("{:.5}", close - year_low),
                high_change: format!("{:.5}", close - year_high),
                low_change_percent: format!("{:.5}", (close - year_low) / year_low * 100.0),
                high_change_percent: format!("{:.5}", (close - year_high) / year_high * 100.0),
                range: format!("{year_low:.2} - {year_high:.2}"),
            },
            last_quote_at: now.timestamp(),
            ..Default::default()
        }
    }
}

impl QuoteSource for SyntheticSource {
    fn fetch(&mut self) -> Result<Vec<Quote>> {
        let now = Utc::now();
        Ok(self
            .symbols
            .iter()
            .map(|symbol| Self::generate(symbol, now))
            .collect())
    }

    fn describe(&self) -> String {
        format!("synthetic quotes for {}", self.symbols.join(","))
    }
}

/// Regular NYSE/NASDAQ trading hours, 13:30 to 20:00 UTC on weekdays.
fn is_us_session(now: DateTime<Utc>) -> bool {
    if matches!(now.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }
    let minutes = now.hour() * 60 + now.minute();
    (13 * 60 + 30..20 * 60).contains(&minutes)
}
