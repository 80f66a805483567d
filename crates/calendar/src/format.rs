//! Conversion between [`CalendarDate`] and the `yyyy-mm-dd` string form.

use crate::date::CalendarDate;

/// Input accepted by [`parse_date`].
///
/// Callers may hold either the string form or an already-parsed date;
/// structured dates pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// A `yyyy-mm-dd` string.
    Text(&'a str),
    /// An already-structured date.
    Date(CalendarDate),
    /// No input.
    Missing,
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for DateInput<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(DateInput::Missing, DateInput::Text)
    }
}

impl From<CalendarDate> for DateInput<'_> {
    fn from(date: CalendarDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<[i32; 3]> for DateInput<'_> {
    fn from(parts: [i32; 3]) -> Self {
        DateInput::Date(CalendarDate::from(parts))
    }
}

/// Parses a `yyyy-mm-dd` string into a [`CalendarDate`].
///
/// The input must be exactly 10 bytes long. Year, month and day are read
/// positionally from bytes `0..4`, `5..7` and `8..10`; whatever sits at
/// positions 4 and 7 is ignored, and no range validation is applied.
/// Returns `None` for missing, empty or wrong-length text, or when a field
/// is not an integer.
///
/// # Example
///
/// ```
/// use almanac_calendar::{CalendarDate, parse_date};
///
/// assert_eq!(parse_date("2024-02-29"), Some(CalendarDate::from_parts(2024, 2, 29)));
/// assert_eq!(parse_date("2024-2-29"), None);
/// ```
pub fn parse_date<'a>(input: impl Into<DateInput<'a>>) -> Option<CalendarDate> {
    let text = match input.into() {
        DateInput::Date(date) => return Some(date),
        DateInput::Missing => return None,
        DateInput::Text(text) => text,
    };
    if text.len() != 10 {
        return None;
    }
    let field = |range: std::ops::Range<usize>| -> Option<i32> {
        text.get(range)?.trim().parse().ok()
    };
    Some(CalendarDate::from_parts(field(0..4)?, field(5..7)?, field(8..10)?))
}

/// Formats a [`CalendarDate`] as `yyyy-mm-dd`.
///
/// Years in 0..=9999 are zero-padded to four digits and larger years are
/// written as-is. Negative years are not representable and are written as
/// `0000`. Month and day get a single leading `0` when they are 9 or less.
pub fn format_date(date: CalendarDate) -> String {
    let year = if date.year < 0 {
        "0000".to_string()
    } else {
        format!("{:04}", date.year)
    };
    format!("{year}-{}-{}", two_digits(date.month), two_digits(date.day))
}

/// Formats an ordered `[year, month, day, ..]` sequence as `yyyy-mm-dd`.
///
/// Returns `None` when fewer than three elements are supplied. Elements past
/// the third are ignored.
pub fn format_date_parts(parts: &[i32]) -> Option<String> {
    match parts {
        [year, month, day, ..] => {
            Some(format_date(CalendarDate::from_parts(*year, *month, *day)))
        }
        _ => None,
    }
}

fn two_digits(value: i32) -> String {
    if value > 9 {
        value.to_string()
    } else {
        format!("0{value}")
    }
}
