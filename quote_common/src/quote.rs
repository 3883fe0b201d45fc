//! Quote snapshot record handed to the viewer by a quote source.
//!
//! Numeric fields are carried as decimal-formatted strings because the upstream
//! pricing API may return placeholders instead of numbers. Decoding is lenient: any
//! field may be missing or `null`, string fields also accept JSON numbers, and a
//! value of the wrong shape falls back to the field's default instead of failing the
//! whole record.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 52-week trading range of an instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiftyTwoWeek {
    /// Lowest price over the last 52 weeks.
    #[serde(deserialize_with = "lenient_string")]
    pub low: String,
    /// Highest price over the last 52 weeks.
    #[serde(deserialize_with = "lenient_string")]
    pub high: String,
    /// Distance of the last price from the 52-week low.
    #[serde(deserialize_with = "lenient_string")]
    pub low_change: String,
    /// Distance of the last price from the 52-week high.
    #[serde(deserialize_with = "lenient_string")]
    pub high_change: String,
    /// `low_change` as a percentage.
    #[serde(deserialize_with = "lenient_string")]
    pub low_change_percent: String,
    /// `high_change` as a percentage.
    #[serde(deserialize_with = "lenient_string")]
    pub high_change_percent: String,
    /// Preformatted range, e.g. `"124.17 - 199.62"`.
    #[serde(deserialize_with = "lenient_string")]
    pub range: String,
}

/// Latest market snapshot for a single instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    /// Ticker symbol, unique within a snapshot (e.g., `AAPL`).
    #[serde(deserialize_with = "lenient_string")]
    pub symbol: String,
    /// Instrument display name.
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    /// Listing exchange.
    #[serde(deserialize_with = "lenient_string")]
    pub exchange: String,
    /// Market identifier code of the exchange.
    #[serde(deserialize_with = "lenient_string")]
    pub mic_code: String,
    /// ISO currency code of the prices.
    #[serde(deserialize_with = "lenient_string")]
    pub currency: String,
    /// Human readable time of the quote.
    #[serde(deserialize_with = "lenient_string")]
    pub datetime: String,
    /// Quote time in seconds since the Unix epoch.
    #[serde(deserialize_with = "lenient_i64")]
    pub timestamp: i64,
    /// Opening price of the session.
    #[serde(deserialize_with = "lenient_string")]
    pub open: String,
    /// Session high.
    #[serde(deserialize_with = "lenient_string")]
    pub high: String,
    /// Session low.
    #[serde(deserialize_with = "lenient_string")]
    pub low: String,
    /// Last (closing) price.
    #[serde(deserialize_with = "lenient_string")]
    pub close: String,
    /// Shares traded in the session.
    #[serde(deserialize_with = "lenient_string")]
    pub volume: String,
    /// Close of the previous session.
    #[serde(deserialize_with = "lenient_string")]
    pub previous_close: String,
    /// Absolute change against the previous close.
    #[serde(deserialize_with = "lenient_string")]
    pub change: String,
    /// Relative change against the previous close, in percent.
    #[serde(deserialize_with = "lenient_string")]
    pub percent_change: String,
    /// Average daily volume.
    #[serde(deserialize_with = "lenient_string")]
    pub average_volume: String,
    /// Change over the last day.
    #[serde(deserialize_with = "lenient_string")]
    pub rolling_1d_change: String,
    /// Change over the last seven days.
    #[serde(deserialize_with = "lenient_string")]
    pub rolling_7d_change: String,
    /// Change over the requested period.
    #[serde(deserialize_with = "lenient_string")]
    pub rolling_period_change: String,
    /// Whether the listing market is currently open.
    #[serde(deserialize_with = "lenient_bool")]
    pub is_market_open: bool,
    /// 52-week range block.
    #[serde(deserialize_with = "lenient_block")]
    pub fifty_two_week: FiftyTwoWeek,
    /// Extended-hours change.
    #[serde(deserialize_with = "lenient_string")]
    pub extended_change: String,
    /// Extended-hours change, in percent.
    #[serde(deserialize_with = "lenient_string")]
    pub extended_percent_change: String,
    /// Extended-hours price.
    #[serde(deserialize_with = "lenient_string")]
    pub extended_price: String,
    /// Extended-hours quote time in seconds since the Unix epoch.
    #[serde(deserialize_with = "lenient_i64")]
    pub extended_timestamp: i64,
    /// Time of the last trade in seconds since the Unix epoch.
    #[serde(deserialize_with = "lenient_i64")]
    pub last_quote_at: i64,
}

/// Accepts a JSON string, number, boolean or `null` and keeps its textual form.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

/// Epoch seconds given as a number or a numeric string. Anything else reads as 0.
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|n| n as i64))
            .unwrap_or_default(),
        Some(Value::String(text)) => text.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

/// A JSON boolean or the strings `"true"`/`"false"`. Anything else reads as `false`.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(flag)) => flag,
        Some(Value::String(text)) => text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// The 52-week block, or an empty one when it is `null` or not an object.
fn lenient_block<'de, D>(deserializer: D) -> Result<FiftyTwoWeek, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(block @ Value::Object(_)) => {
            serde_json::from_value::<FiftyTwoWeek>(block).unwrap_or_default()
        }
        _ => FiftyTwoWeek::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_upstream_record() {
        let json = r#"{
            "symbol": "AAPL",
            "name": "Apple Inc.",
            "exchange": "NASDAQ",
            "currency": "USD",
            "close": "189.84",
            "change": "-1.23",
            "volume": "53219000",
            "is_market_open": false,
            "fifty_two_week": { "low": "124.17", "high": "199.62", "range": "124.17 - 199.62" }
        }"#;

        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.close, "189.84");
        assert_eq!(quote.change, "-1.23");
        assert_eq!(quote.fifty_two_week.range, "124.17 - 199.62");
        assert_eq!(quote.open, "");
        assert_eq!(quote.timestamp, 0);
    }

    #[test]
    fn keeps_numbers_and_nulls_as_text() {
        let json = r#"{ "symbol": "MSFT", "close": 412.5, "volume": null, "change": "N/A" }"#;

        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.close, "412.5");
        assert_eq!(quote.volume, "");
        assert_eq!(quote.change, "N/A");
    }

    #[test]
    fn nulls_in_scalar_fields_fall_back_to_defaults() {
        let json = r#"{
            "symbol": "X",
            "timestamp": null,
            "extended_timestamp": "1714575600",
            "last_quote_at": 1714575600.0,
            "is_market_open": null,
            "fifty_two_week": null
        }"#;

        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.symbol, "X");
        assert_eq!(quote.timestamp, 0);
        assert_eq!(quote.extended_timestamp, 1_714_575_600);
        assert_eq!(quote.last_quote_at, 1_714_575_600);
        assert!(!quote.is_market_open);
        assert_eq!(quote.fifty_two_week, FiftyTwoWeek::default());
    }

    #[test]
    fn wrongly_shaped_values_do_not_reject_the_record() {
        let json = r#"{
            "symbol": "MSFT",
            "close": "412.50",
            "timestamp": "soon",
            "is_market_open": "true",
            "fifty_two_week": "124.17 - 199.62"
        }"#;

        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.close, "412.50");
        assert_eq!(quote.timestamp, 0);
        assert!(quote.is_market_open);
        assert_eq!(quote.fifty_two_week.range, "");
    }
}
