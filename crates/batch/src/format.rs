//! Cell value formatting dispatch
//!
//! `format_value` is the single funnel between raw spreadsheet cells and the
//! strings stamped on the page. It never fails: unparsable values degrade to
//! a best-effort string.

use crate::schema::ColumnType;
use br_format::{
    format_cnpj, format_cpf, format_currency, format_date, format_datetime, format_phone,
    is_blank_or_nan, parse_date_value,
};
use chrono::NaiveDateTime;

/// A raw spreadsheet cell value
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl RawValue {
    /// Stringify the value the way it would display in a spreadsheet.
    /// Integral numbers print without a fractional part.
    pub fn to_display_string(&self) -> String {
        match self {
            RawValue::Empty => String::new(),
            RawValue::Text(s) => s.clone(),
            RawValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            RawValue::Bool(b) => b.to_string(),
            RawValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Format a raw cell value for stamping, per the column's declared type.
///
/// Native datetime cells skip string parsing for the date types. Results
/// that are empty or read "nan" normalize to the empty string so the field
/// renders with no visible glyphs.
pub fn format_value(raw: &RawValue, column_type: ColumnType) -> String {
    let formatted = match column_type {
        ColumnType::Text | ColumnType::Number | ColumnType::Email => raw.to_display_string(),
        ColumnType::Currency => format_currency(&raw.to_display_string()),
        ColumnType::Date => match raw {
            RawValue::DateTime(dt) => format_date(dt),
            _ => {
                let s = raw.to_display_string();
                match parse_date_value(&s) {
                    Some(dt) => format_date(&dt),
                    None => s.trim().to_string(),
                }
            }
        },
        ColumnType::DateTime => match raw {
            RawValue::DateTime(dt) => format_datetime(dt),
            _ => {
                let s = raw.to_display_string();
                match parse_date_value(&s) {
                    Some(dt) => format_datetime(&dt),
                    None => s.trim().to_string(),
                }
            }
        },
        ColumnType::Cpf => format_cpf(&raw.to_display_string()),
        ColumnType::Cnpj => format_cnpj(&raw.to_display_string()),
        ColumnType::Phone => format_phone(&raw.to_display_string()),
    };

    if is_blank_or_nan(&formatted) {
        String::new()
    } else {
        formatted
    }
}
