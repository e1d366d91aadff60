//! Monetary amount parsing.

/// Parse a monetary token into a number.
///
/// Strips currency symbols and thousands separators, then parses a decimal
/// amount. Failure yields `None` rather than an error.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '₹' | '$' | '€' | '£' | ','))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(parse_amount("5000"), Some(5000.0));
    }

    #[test]
    fn test_currency_and_separators() {
        assert_eq!(parse_amount("₹12,500.50"), Some(12500.5));
        assert_eq!(parse_amount("$1,000"), Some(1000.0));
    }

    #[test]
    fn test_negative_amount_parses() {
        // Negativity is a consistency finding, not a parse failure
        assert_eq!(parse_amount("-250"), Some(-250.0));
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(parse_amount("about five grand"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("₹,"), None);
    }
}
