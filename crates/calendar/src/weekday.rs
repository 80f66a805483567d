//! Day of the week and the long human-readable date form.

use std::fmt;

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::month::month_name;

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Sunday.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the weekday for a 0-based index counted from Sunday, modulo 7.
    pub fn from_sunday_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    /// Returns the 0-based index counted from Sunday.
    pub fn sunday_index(self) -> u8 {
        self as u8
    }

    /// Returns the English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Month offsets for Sakamoto's weekday method (index 0 = January).
const MONTH_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Returns the day of the week of a valid proleptic Gregorian date.
///
/// Months outside 1..=12 are clamped into range.
pub fn weekday(date: CalendarDate) -> Weekday {
    let month = date.month.clamp(1, 12);
    // January and February count as months of the previous year.
    let year = i64::from(date.year) - i64::from(month < 3);
    let index = year + year.div_euclid(4) - year.div_euclid(100)
        + year.div_euclid(400)
        + MONTH_OFFSETS[(month - 1) as usize]
        + i64::from(date.day);
    Weekday::from_sunday_index(index)
}

/// Formats `date` as `"<Weekday> <Month> <day>, <year>"`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
/// if `date` does not exist.
///
/// # Example
///
/// ```
/// use almanac_calendar::{CalendarDate, long_date};
///
/// let leap_day = CalendarDate::from_parts(2024, 2, 29);
/// assert_eq!(long_date(leap_day).unwrap(), "Thursday February 29, 2024");
/// ```
pub fn long_date(date: CalendarDate) -> Result<String, CalendarError> {
    let date = CalendarDate::new(date.year, date.month, date.day)?;
    Ok(format!(
        "{} {} {}, {}",
        weekday(date),
        month_name(date.month)?,
        date.day,
        date.year
    ))
}
