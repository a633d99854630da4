//! Amount parsing for printed statement figures like `"10,000.00"`.

use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

use crate::error::{Result, StatementError};

/// Printed amount as statement rows show it: up to 15 integer digits, either
/// grouped by thousands or ungrouped, and exactly two decimals.
///
/// Every match parses with [`parse_amount`], and the bound keeps sums over
/// any realistic number of rows far inside `Decimal`'s range.
pub const AMOUNT_PATTERN: &str = r"(?:[0-9]{1,3}(?:,[0-9]{3}){0,4}|[0-9]{1,15})\.[0-9]{2}";

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&["^", AMOUNT_PATTERN, "$"].concat()).expect("amount regex"))
}

/// Whether `raw` is a complete printed amount.
pub fn is_amount(raw: &str) -> bool {
    amount_re().is_match(raw)
}

/// Parse a printed amount, dropping thousands separators.
///
/// The result keeps the printed scale, so `"1,500.00"` becomes `1500.00`
/// rather than `1500`.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(StatementError::InvalidAmount(raw.to_string()));
    }
    cleaned
        .parse::<Decimal>()
        .map_err(|_| StatementError::InvalidAmount(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_grouping_separators() {
        assert_eq!(parse_amount("10,000.00").unwrap(), Decimal::new(1_000_000, 2));
        assert_eq!(parse_amount("1,234,567.89").unwrap(), Decimal::new(123_456_789, 2));
        assert_eq!(parse_amount("309.00").unwrap().to_string(), "309.00");
    }

    #[test]
    fn test_rejects_garbage_instead_of_zero() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount(",,,").is_err());
        assert!(parse_amount("-5.00").is_err());
        assert!(parse_amount("๑๒.๐๐").is_err());
        assert_eq!(
            parse_amount("abc"),
            Err(StatementError::InvalidAmount("abc".to_string()))
        );
    }

    #[test]
    fn test_every_accepted_amount_parses() {
        for raw in [
            "0.00",
            "0.25",
            "309.00",
            "1,500.00",
            "1500.00",
            "999,999,999,999,999.99",
            "999999999999999.99",
        ] {
            assert!(is_amount(raw), "{:?} should be accepted", raw);
            assert!(parse_amount(raw).is_ok(), "{:?} should parse", raw);
        }
        assert_eq!(
            parse_amount("999,999,999,999,999.99").unwrap(),
            Decimal::new(99_999_999_999_999_999, 2)
        );
    }

    #[test]
    fn test_out_of_range_amounts_are_not_accepted() {
        for raw in [
            "1,000,000,000,000,000.00",
            "1000000000000000.00",
            "100,000,000,000,000,000,000,000,000,000.00",
            "1234,567.00",
            "1,23.00",
            ",100.00",
            "100.0",
            "100",
        ] {
            assert!(!is_amount(raw), "{:?} should be rejected", raw);
        }
    }
}
