//! Error types for the almanac-calendar crate.

use crate::date::CalendarDate;

/// Error type for the validating entry points of the almanac-calendar crate.
///
/// The lenient operations (`parse_date`, `format_date_parts`) report
/// malformed input as `None` instead; only constructors and strict parsers
/// produce this error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i32,
    },

    /// Returned when a day number is outside the length of the given month.
    #[error("invalid day: {day} for {year}-{month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: i32,
        /// The month for which the day is invalid.
        month: i32,
        /// The year of the month, relevant for February.
        year: i32,
        /// The maximum valid day for the given month.
        max_day: i32,
    },

    /// Returned when a year string is not an integer.
    #[error("invalid year: {input:?} (must be an integer)")]
    InvalidYear {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when an offset moves the year outside the `i32` range.
    #[error("offset of {offset_days} days from {start} leaves the supported year range")]
    OffsetOutOfRange {
        /// The date the offset was applied to.
        start: CalendarDate,
        /// The requested offset in days.
        offset_days: i64,
    },

    /// Returned when a date string is not in `yyyy-mm-dd` form.
    #[error("malformed date: {input:?} (expected yyyy-mm-dd)")]
    MalformedDate {
        /// The text that failed to parse.
        input: String,
    },
}
