//! BR Format - Brazilian value formatting
//!
//! This crate provides:
//! - Currency formatting ("R$ 1234,50", decimal comma)
//! - Day-first date parsing and Brazilian date/datetime rendering
//! - CPF, CNPJ, and phone number formatting
//!
//! All functions are best-effort: values that cannot be interpreted are
//! passed through (trimmed or lightly cleaned) rather than rejected, so a
//! bad cell never aborts a run.
//!
//! # Example
//!
//! ```
//! use br_format::{format_cpf, format_currency};
//!
//! assert_eq!(format_currency("1234.5"), "R$ 1234,50");
//! assert_eq!(format_cpf("12345678901"), "123.456.789-01");
//! ```

mod currency;
mod date;
mod identifier;

pub use currency::format_currency;
pub use date::{format_date, format_datetime, parse_date_value};
pub use identifier::{format_cnpj, format_cpf, format_phone};

/// True for values that should render as nothing on the page.
///
/// Spreadsheet readers stringify missing cells as `"nan"` (any casing), so
/// both empty strings and that marker count as blank.
///
/// # Examples
/// ```
/// use br_format::is_blank_or_nan;
/// assert!(is_blank_or_nan(""));
/// assert!(is_blank_or_nan("NaN"));
/// assert!(!is_blank_or_nan("0"));
/// ```
pub fn is_blank_or_nan(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("nan")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank_or_nan() {
        assert!(is_blank_or_nan(""));
        assert!(is_blank_or_nan("nan"));
        assert!(is_blank_or_nan("NAN"));
        assert!(is_blank_or_nan("NaN"));
        assert!(!is_blank_or_nan(" "));
        assert!(!is_blank_or_nan("nana"));
    }
}
