//! Gregorian calendar date value type.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::format::{format_date, parse_date};
use crate::month::days_in_month;
use crate::offset::offset_date;
use crate::weekday::{Weekday, weekday};

/// A date in the proleptic Gregorian calendar.
///
/// Fields are public and unchecked: a value built with [`CalendarDate::from_parts`]
/// or struct syntax may hold an out-of-range month or day. Offset and
/// difference computations assume a valid date; use [`CalendarDate::new`] or
/// [`str::parse`] to obtain one.
///
/// Ordering is chronological for valid dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    /// Calendar year. Negative years follow the proleptic Gregorian rule.
    pub year: i32,
    /// Month of the year (1..=12).
    pub month: i32,
    /// Day of the month (1..=31).
    pub day: i32,
}

impl CalendarDate {
    /// Creates a validated `CalendarDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12, or
    /// [`CalendarError::InvalidDay`] if `day` is outside the month's length.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a `CalendarDate` without validating month or day.
    pub const fn from_parts(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Returns `true` if the month and day are in range for the year.
    pub fn is_valid(self) -> bool {
        Self::new(self.year, self.month, self.day).is_ok()
    }

    /// Returns the date `days` whole days after (or before, if negative) this one.
    pub fn offset(self, days: i64) -> Self {
        offset_date(self, days)
    }

    /// Returns the following calendar day.
    pub fn next(self) -> Self {
        offset_date(self, 1)
    }

    /// Returns the preceding calendar day.
    pub fn previous(self) -> Self {
        offset_date(self, -1)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        weekday(self)
    }
}

impl From<[i32; 3]> for CalendarDate {
    fn from([year, month, day]: [i32; 3]) -> Self {
        Self::from_parts(year, month, day)
    }
}

impl From<CalendarDate> for [i32; 3] {
    fn from(date: CalendarDate) -> Self {
        [date.year, date.month, date.day]
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_date(*self))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses a strict `yyyy-mm-dd` string and validates the result.
    ///
    /// Unlike [`parse_date`], the separators must be `-`, every other
    /// character must be an ASCII digit, and the date must exist.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CalendarError::MalformedDate {
            input: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 10 {
            return Err(malformed());
        }
        let well_formed = bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
        if !well_formed {
            return Err(malformed());
        }
        let date = parse_date(s).ok_or_else(malformed)?;
        Self::new(date.year, date.month, date.day)
    }
}
