use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a monetary amount or quantity from invoice text.
///
/// Handles thousands separators ("20,049.00" -> 20049.00). Returns None for
/// anything that does not parse as a non-negative decimal; amounts on an
/// invoice are never negative, so a minus sign means a misparse.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    let value = Decimal::from_str(&cleaned).ok()?;
    if value.is_sign_negative() {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_amount("68"), Some(dec!(68)));
    }

    #[test]
    fn test_decimal_point() {
        assert_eq!(parse_amount("24.1264"), Some(dec!(24.1264)));
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(parse_amount("20,049.00"), Some(dec!(20049.00)));
        assert_eq!(parse_amount("483,710.19"), Some(dec!(483710.19)));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(parse_amount("  18.50  "), Some(dec!(18.50)));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(parse_amount("-5.00"), None);
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert_eq!(parse_amount("DIESEL"), None);
        assert_eq!(parse_amount(""), None);
    }
}
