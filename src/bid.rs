//! The bid record and the permissive parsers used to build and index it

use log::warn;
use std::fmt;

/// A single bid as read from the monthly sales export
///
/// Two bids are the same entity iff their `id` strings are equal; the other
/// fields play no part in indexing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bid {
    /// Unique identifier, numeric text in practice
    pub id: String,
    /// Title of the auctioned item
    pub title: String,
    /// Fund the proceeds belong to
    pub fund: String,
    /// Winning amount with the currency symbol already stripped
    pub amount: f64,
}

impl Bid {
    /// Creates a bid from its four fields
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        fund: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self { id: id.into(), title: title.into(), fund: fund.into(), amount }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} | {} | {}", self.id, self.title, self.amount, self.fund)
    }
}

/// Converts an identifier to the integer that gets hashed.
///
/// Accepts optional leading whitespace and sign, then reads the longest run of
/// ASCII digits. Text without leading digits maps to `0`, so `"abc"`, `""`
/// and `"0042"` all share a bucket with `"0"`. Values outside `i64` saturate.
#[must_use]
pub fn numeric_key(id: &str) -> i64 {
    let trimmed = id.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..).unwrap_or_default()),
        Some(b'+') => (false, trimmed.get(1..).unwrap_or_default()),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit.saturating_sub(b'0')))
        });

    if negative { magnitude.saturating_neg() } else { magnitude }
}

/// Parses a currency string such as `"$1,250.00"` into a number.
///
/// Every `symbol` and thousands separator is removed before parsing. Anything
/// that still fails to parse yields `0.0`.
#[must_use]
pub fn parse_amount(text: &str, symbol: char) -> f64 {
    let cleaned: String = text.chars().filter(|&c| c != symbol && c != ',').collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return 0.0;
    }

    cleaned.parse().unwrap_or_else(|_| {
        warn!("Unparseable amount {text:?}, using 0");
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bid_is_empty() {
        let bid = Bid::default();
        assert!(bid.id.is_empty());
        assert!(bid.title.is_empty());
        assert!(bid.fund.is_empty());
        assert!(bid.amount.abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        let bid = Bid::new("98223", "Table", "General Fund", 27.5);
        assert_eq!(bid.to_string(), "98223: Table | 27.5 | General Fund");
    }

    #[test]
    fn test_numeric_key_digits() {
        assert_eq!(numeric_key("98223"), 98_223);
        assert_eq!(numeric_key("  17"), 17);
        assert_eq!(numeric_key("+8"), 8);
        assert_eq!(numeric_key("-12"), -12);
    }

    #[test]
    fn test_numeric_key_stops_at_first_non_digit() {
        assert_eq!(numeric_key("123abc"), 123);
        assert_eq!(numeric_key("12.9"), 12);
    }

    #[test]
    fn test_numeric_key_non_numeric_is_zero() {
        assert_eq!(numeric_key(""), 0);
        assert_eq!(numeric_key("abc"), 0);
        assert_eq!(numeric_key("-"), 0);
        assert_eq!(numeric_key("x42"), 0);
    }

    #[test]
    fn test_numeric_key_saturates() {
        assert_eq!(numeric_key("99999999999999999999999"), i64::MAX);
        assert_eq!(numeric_key("-99999999999999999999999"), -i64::MAX);
    }

    #[test]
    fn test_parse_amount() {
        assert!((parse_amount("$27.50", '$') - 27.5).abs() < f64::EPSILON);
        assert!((parse_amount("$1,250.00", '$') - 1250.0).abs() < f64::EPSILON);
        assert!((parse_amount(" 3 ", '$') - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_amount_falls_back_to_zero() {
        assert!(parse_amount("", '$').abs() < f64::EPSILON);
        assert!(parse_amount("$", '$').abs() < f64::EPSILON);
        assert!(parse_amount("n/a", '$').abs() < f64::EPSILON);
    }
}
