//! CPF, CNPJ, and phone number formatting

/// Format an 11-digit CPF as `XXX.XXX.XXX-XX`
///
/// Non-digits are ignored when counting; any other digit count returns the
/// value unchanged.
///
/// # Examples
/// ```
/// use br_format::format_cpf;
/// assert_eq!(format_cpf("12345678901"), "123.456.789-01");
/// assert_eq!(format_cpf("123.456.789-01"), "123.456.789-01");
/// assert_eq!(format_cpf("1234567"), "1234567");
/// ```
pub fn format_cpf(value: &str) -> String {
    let digits = digits_of(value);
    if digits.len() == 11 {
        format!(
            "{}.{}.{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..11]
        )
    } else {
        value.to_string()
    }
}

/// Format a 14-digit CNPJ as `XX.XXX.XXX/XXXX-XX`
///
/// # Examples
/// ```
/// use br_format::format_cnpj;
/// assert_eq!(format_cnpj("12345678000195"), "12.345.678/0001-95");
/// assert_eq!(format_cnpj("12345"), "12345");
/// ```
pub fn format_cnpj(value: &str) -> String {
    let digits = digits_of(value);
    if digits.len() == 14 {
        format!(
            "{}.{}.{}/{}-{}",
            &digits[0..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..14]
        )
    } else {
        value.to_string()
    }
}

/// Format a Brazilian phone number
///
/// 11 digits (mobile) become `(XX) XXXXX-XXXX`, 10 digits (landline) become
/// `(XX) XXXX-XXXX`, anything else is returned unchanged.
///
/// # Examples
/// ```
/// use br_format::format_phone;
/// assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
/// assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
/// assert_eq!(format_phone("190"), "190");
/// ```
pub fn format_phone(value: &str) -> String {
    let digits = digits_of(value);
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[0..2], &digits[2..7], &digits[7..11]),
        10 => format!("({}) {}-{}", &digits[0..2], &digits[2..6], &digits[6..10]),
        _ => value.to_string(),
    }
}

fn digits_of(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
