//! Numeric-string handling.
//!
//! The row store carries every number as a string ("100", "12.5"). All
//! arithmetic goes through [`rust_decimal::Decimal`] so that stock levels
//! round-trip exactly: "100" plus "25" persists as "125", never "125.0".

use core::str::FromStr;

use rust_decimal::Decimal;

/// Parse a decimal-as-string field. Surrounding whitespace is tolerated.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

/// Parse a quantity that must be strictly positive.
pub fn parse_positive(raw: &str) -> Option<Decimal> {
    parse_decimal(raw).filter(|d| d.is_sign_positive() && !d.is_zero())
}

/// Render a decimal back to its canonical string form.
pub fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_and_fractions() {
        assert_eq!(parse_decimal("100").unwrap().to_string(), "100");
        assert_eq!(parse_decimal(" 12.5 ").unwrap().to_string(), "12.5");
        assert!(parse_decimal("abc").is_none());
        assert!(parse_decimal("").is_none());
    }

    #[test]
    fn positive_rejects_zero_and_negatives() {
        assert!(parse_positive("0").is_none());
        assert!(parse_positive("-5").is_none());
        assert!(parse_positive("0.0").is_none());
        assert_eq!(parse_positive("12.5").unwrap().to_string(), "12.5");
    }

    #[test]
    fn formatting_drops_trailing_zeros() {
        let sum = parse_decimal("100").unwrap() + parse_decimal("25").unwrap();
        assert_eq!(format_decimal(sum), "125");

        let sum = parse_decimal("100").unwrap() + parse_decimal("12.5").unwrap();
        assert_eq!(format_decimal(sum), "112.5");
    }
}
