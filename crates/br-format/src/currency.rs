//! Brazilian Real currency formatting

/// Format a raw cell value as Brazilian currency
///
/// Currency symbols and surrounding whitespace are stripped, the remainder is
/// parsed as a decimal-point number, and the result is rendered with two
/// decimal digits and a decimal comma. Values that do not parse are returned
/// as the stripped string, unchanged.
///
/// # Examples
/// ```
/// use br_format::format_currency;
/// assert_eq!(format_currency("1234.5"), "R$ 1234,50");
/// assert_eq!(format_currency("R$ 100"), "R$ 100,00");
/// assert_eq!(format_currency("N/A"), "N/A");
/// ```
pub fn format_currency(value: &str) -> String {
    let cleaned = value.replace("R$", "").replace('$', "");
    let cleaned = cleaned.trim();

    match cleaned.parse::<f64>() {
        Ok(amount) => format!("R$ {amount:.2}").replace('.', ","),
        Err(_) => cleaned.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_number() {
        assert_eq!(format_currency("1234.5"), "R$ 1234,50");
        assert_eq!(format_currency("100"), "R$ 100,00");
        assert_eq!(format_currency("0.1"), "R$ 0,10");
    }

    #[test]
    fn test_strips_currency_symbols() {
        assert_eq!(format_currency("R$ 99.9"), "R$ 99,90");
        assert_eq!(format_currency("$50"), "R$ 50,00");
        assert_eq!(format_currency("  12.34  "), "R$ 12,34");
    }

    #[test]
    fn test_unparsable_passes_through_stripped() {
        assert_eq!(format_currency("N/A"), "N/A");
        assert_eq!(format_currency("R$ abc"), "abc");
        // comma-decimal input does not parse as f64 and is kept as-is
        assert_eq!(format_currency("1234,56"), "1234,56");
    }

    #[test]
    fn test_negative_and_rounding() {
        assert_eq!(format_currency("-5"), "R$ -5,00");
        assert_eq!(format_currency("2.346"), "R$ 2,35");
        assert_eq!(format_currency("2.344"), "R$ 2,34");
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_currency(""), "");
        assert_eq!(format_currency("   "), "");
    }
}
