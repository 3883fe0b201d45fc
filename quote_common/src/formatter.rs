//! Display formatting for numeric quote fields.
//!
//! All functions are total: a value that does not parse as a decimal number is
//! returned unchanged, so a placeholder such as `"N/A"` reaches the screen as-is.

/// Magnitude thresholds used by [`format_large_number`], largest first.
const MAGNITUDES: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Returns the display symbol and number of decimals for a currency code.
///
/// Unknown codes fall back to `$` with two decimals.
pub fn currency_style(currency: &str) -> (&'static str, usize) {
    match currency {
        "EUR" => ("€", 2),
        "GBP" => ("£", 2),
        "JPY" => ("¥", 0),
        _ => ("$", 2),
    }
}

/// Formats `value` as an amount of `currency`, e.g. `"$1234.50"` or `"¥1235"`.
///
/// No thousands separators are inserted; the sign stays after the symbol (`"$-1.23"`).
pub fn format_currency(value: &str, currency: &str) -> String {
    let Ok(number) = value.parse::<f64>() else {
        return value.to_string();
    };
    let (symbol, decimals) = currency_style(currency);
    format!("{symbol}{number:.decimals$}")
}

/// Formats `value` as a percentage with two decimals, e.g. `"1.50%"`.
///
/// Values already containing `%` are considered formatted and returned unchanged.
pub fn format_percentage(value: &str) -> String {
    if value.contains('%') {
        return value.to_string();
    }
    match value.parse::<f64>() {
        Ok(number) => format!("{number:.2}%"),
        Err(_) => value.to_string(),
    }
}

/// Abbreviates `value` with a `K`, `M` or `B` suffix, e.g. `"2.50M"`.
///
/// Values below one thousand keep two decimals and get no suffix.
pub fn format_large_number(value: &str) -> String {
    let Ok(number) = value.parse::<f64>() else {
        return value.to_string();
    };
    let magnitude = number.abs();
    let (divisor, suffix) = MAGNITUDES
        .iter()
        .find(|(threshold, _)| magnitude >= *threshold)
        .copied()
        .unwrap_or((1.0, ""));
    format!("{:.2}{}", number / divisor, suffix)
}

/// Parses `value` as a decimal number, `None` for placeholders.
pub fn parse_decimal(value: &str) -> Option<f64> {
    value.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_returned_unchanged() {
        for raw in ["", "N/A", "abc", "12,5", "--"] {
            assert_eq!(format_currency(raw, "USD"), raw);
            assert_eq!(format_percentage(raw), raw);
            assert_eq!(format_large_number(raw), raw);
        }
    }

    #[test]
    fn currency_symbols_and_precision() {
        assert_eq!(format_currency("1234.5", "USD"), "$1234.50");
        assert_eq!(format_currency("10", "EUR"), "€10.00");
        assert_eq!(format_currency("7.126", "GBP"), "£7.13");
        assert_eq!(format_currency("99.99", "CHF"), "$99.99");
        assert_eq!(format_currency("-1.23", "USD"), "$-1.23");

        let yen = format_currency("1234.5", "JPY");
        assert!(yen == "¥1234" || yen == "¥1235", "unexpected {yen}");
        assert_eq!(format_currency("1234.7", "JPY"), "¥1235");
    }

    #[test]
    fn percentage_short_circuits_on_formatted_input() {
        assert_eq!(format_percentage("5%"), "5%");
        assert_eq!(format_percentage("-0.5%"), "-0.5%");
        assert_eq!(format_percentage("1.5"), "1.50%");
        assert_eq!(format_percentage("-2.346"), "-2.35%");
    }

    #[test]
    fn large_numbers_get_suffixes() {
        assert_eq!(format_large_number("2500000"), "2.50M");
        assert_eq!(format_large_number("999"), "999.00");
        assert_eq!(format_large_number("1000"), "1.00K");
        assert_eq!(format_large_number("3200000000"), "3.20B");
        assert_eq!(format_large_number("-1500"), "-1.50K");
        assert_eq!(format_large_number("-12"), "-12.00");
    }
}
