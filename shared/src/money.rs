//! Currency formatting and parsing for the dashboard's Brazilian-real display.
//!
//! Amounts travel as `f64` everywhere in the app; this module is the only
//! place that converts them to and from the localized text the user sees
//! ("R$ 1.234,56").

use serde::{Deserialize, Deserializer, Serialize};

/// Layout of a formatted amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }
}

impl CurrencyFormat {
    /// Format an amount with two decimals, e.g. `R$ 1.234,56` or `-R$ 10,00`
    pub fn format(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let cents = (value.abs() * 100.0).round() as u64;
        let units = cents / 100;
        let fraction = cents % 100;

        let digits = units.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(ch);
        }

        let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
        format!(
            "{}{} {}{}{:02}",
            sign, self.symbol, grouped, self.decimal_separator, fraction
        )
    }
}

/// Format an amount using the default BRL layout
pub fn format_money(value: f64) -> String {
    CurrencyFormat::default().format(value)
}

/// Read a number the API sent as text, e.g. `"1500.50"` or `"R$ 12.5"`.
///
/// Unlike [`parse_localized`], `.` is the decimal separator here: everything
/// but digits, `.` and `-` is dropped and the leading number is taken.
pub fn parse_wire_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    leading_number(&cleaned)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireNumber {
    Number(f64),
    Text(String),
}

impl WireNumber {
    fn value(self) -> Option<f64> {
        match self {
            WireNumber::Number(n) => Some(n),
            WireNumber::Text(text) => parse_wire_number(&text),
        }
    }
}

/// Serde helper for amounts that may arrive as a number, a numeric string or
/// null. Text without a number reads as zero.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = Option::<WireNumber>::deserialize(deserializer)?;
    Ok(wire.and_then(WireNumber::value).unwrap_or(0.0))
}

/// Serde helper for optional counts sent as a number or a numeric string.
/// Negative or unreadable values become `None`.
pub fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = Option::<WireNumber>::deserialize(deserializer)?;
    Ok(wire
        .and_then(WireNumber::value)
        .filter(|n| n.is_finite() && *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n.round() as u32))
}

/// Parse a user-typed amount in pt-BR notation.
///
/// `.` is treated as a thousands separator and the first `,` as the decimal
/// separator, so `"1.234,56"` is `1234.56`. Returns `None` when the input
/// holds no number at all.
pub fn parse_localized(raw: &str) -> Option<f64> {
    let without_groups = raw.trim().replace('.', "");
    let normalized = without_groups.replacen(',', ".", 1);
    let cleaned: String = normalized
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    leading_number(&cleaned)
}

// Longest prefix of the form `-?digits(.digits)?` that contains at least one digit.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }

    if !has_digits {
        return None;
    }
    text[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_round_trip() {
        let parsed = parse_localized("1.234,56").unwrap();
        assert!((parsed - 1234.56).abs() < 1e-9);
        assert_eq!(format_money(parsed), "R$ 1.234,56");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "R$ 0,00");
        assert_eq!(format_money(5.5), "R$ 5,50");
        assert_eq!(format_money(999.999), "R$ 1.000,00");
        assert_eq!(format_money(1_234_567.8), "R$ 1.234.567,80");
        assert_eq!(format_money(-42.1), "-R$ 42,10");
        assert_eq!(format_money(-0.001), "R$ 0,00");
        assert_eq!(format_money(f64::NAN), "R$ 0,00");
    }

    #[test]
    fn test_parse_localized_variants() {
        assert_eq!(parse_localized("10"), Some(10.0));
        assert_eq!(parse_localized("10,5"), Some(10.5));
        assert_eq!(parse_localized("R$ 2.000"), Some(2000.0));
        assert_eq!(parse_localized("-3,25"), Some(-3.25));
        assert_eq!(parse_localized("  7  "), Some(7.0));
        assert_eq!(parse_localized(",5"), Some(0.5));
    }

    #[test]
    fn test_parse_localized_rejects_non_numbers() {
        assert_eq!(parse_localized(""), None);
        assert_eq!(parse_localized("abc"), None);
        assert_eq!(parse_localized("-"), None);
    }

    #[test]
    fn test_parse_wire_number() {
        assert_eq!(parse_wire_number("1500.50"), Some(1500.5));
        assert_eq!(parse_wire_number("R$ 12.5"), Some(12.5));
        assert_eq!(parse_wire_number("-3"), Some(-3.0));
        assert_eq!(parse_wire_number("nothing"), None);
    }

    #[test]
    fn test_custom_currency_format() {
        let usd = CurrencyFormat {
            symbol: "$".to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
        };
        assert_eq!(usd.format(1234.5), "$ 1,234.50");
    }
}
