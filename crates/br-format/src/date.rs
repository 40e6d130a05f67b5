//! Day-first date parsing and Brazilian date rendering

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

/// Day-first datetime formats tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Day-first date formats tried in order (ISO included, year-first is
/// unambiguous even under a day-first policy)
const DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d", "%Y/%m/%d", "%d/%m/%y", "%d-%m-%y",
];

/// Parse a raw cell string into a datetime, day-first.
///
/// The parse chain is: known day-first formats, then a loose parser that
/// splits on `/`, `-`, or `.` separators, then extraction of a date-like
/// substring from surrounding noise. Returns `None` when nothing in the
/// value looks like a date.
///
/// # Examples
/// ```
/// use br_format::parse_date_value;
/// use chrono::{Datelike, Timelike};
///
/// let dt = parse_date_value("05/03/2024").unwrap();
/// assert_eq!((dt.day(), dt.month(), dt.year()), (5, 3, 2024));
///
/// let dt = parse_date_value("2024-03-05 14:30:00").unwrap();
/// assert_eq!((dt.hour(), dt.minute()), (14, 30));
///
/// assert!(parse_date_value("sem data").is_none());
/// ```
pub fn parse_date_value(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    parse_known_formats(trimmed)
        .or_else(|| parse_loose(trimmed))
        .or_else(|| extract_and_parse(trimmed))
}

/// Render a datetime as `DD/MM/YYYY`
///
/// # Examples
/// ```
/// use br_format::{format_date, parse_date_value};
/// let dt = parse_date_value("2024-03-05").unwrap();
/// assert_eq!(format_date(&dt), "05/03/2024");
/// ```
pub fn format_date(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y").to_string()
}

/// Render a datetime as `DD/MM/YYYY às HH:MM`
///
/// # Examples
/// ```
/// use br_format::{format_datetime, parse_date_value};
/// let dt = parse_date_value("05/03/2024 14:30").unwrap();
/// assert_eq!(format_datetime(&dt), "05/03/2024 às 14:30");
/// ```
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y às %H:%M").to_string()
}

fn parse_known_formats(s: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Loose parser for odd separators and mixed two/four digit fields
fn parse_loose(s: &str) -> Option<NaiveDateTime> {
    let mut tokens = s.split_whitespace();
    let date_token = tokens.next()?;
    let time_token = tokens.next();

    let parts: Vec<&str> = date_token.split(['/', '-', '.']).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }

    let numbers: Vec<i32> = parts.iter().filter_map(|p| p.parse().ok()).collect();
    if numbers.len() != 3 {
        return None;
    }

    // Four digits up front means year-first, otherwise day-first
    let (year, month, day) = if parts[0].len() == 4 {
        (numbers[0], numbers[1] as u32, numbers[2] as u32)
    } else {
        (numbers[2], numbers[1] as u32, numbers[0] as u32)
    };
    let year = if year < 100 { year + 2000 } else { year };

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = match time_token {
        Some(t) => parse_time(t)?,
        None => NaiveTime::from_hms_opt(0, 0, 0)?,
    };
    Some(date.and_time(time))
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

/// Pull a date-like substring out of surrounding noise and retry
fn extract_and_parse(s: &str) -> Option<NaiveDateTime> {
    let pattern = Regex::new(r"(\d{1,4}[-/.]\d{1,2}[-/.]\d{1,4})").ok()?;
    let fragment = pattern.find(s)?.as_str();
    parse_known_formats(fragment).or_else(|| parse_loose(fragment))
}
