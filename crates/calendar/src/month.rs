//! Month lengths, day-of-year ordinals and month names.

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::leap::is_leap_year;

/// Months with 31 days (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const THIRTY_ONE_DAY_MONTHS: [bool; 13] = [
    false, true, false, true, false, true, false, true, true, false, true, false, true,
];

/// English month names (index 0 unused).
const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the number of days in `month` of `year`.
///
/// February is 29 days in leap years and 28 otherwise. Months outside
/// 1..=12 are not rejected and count as 30-day months.
pub fn days_in_month(year: i32, month: i32) -> i32 {
    if month == 2 {
        return if is_leap_year(year) { 29 } else { 28 };
    }
    match usize::try_from(month) {
        Ok(m) if m <= 12 && THIRTY_ONE_DAY_MONTHS[m] => 31,
        _ => 30,
    }
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the 1-based day-of-year of `date`, counting February 29 in leap years.
pub fn day_of_year(date: CalendarDate) -> i32 {
    // Only month 13 lies past December, so later months add nothing more.
    let preceding: i32 = (1..date.month.min(14))
        .map(|m| days_in_month(date.year, m))
        .sum();
    preceding.saturating_add(date.day)
}

/// Returns the English name of `month`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_name(month: i32) -> Result<&'static str, CalendarError> {
    match usize::try_from(month) {
        Ok(m) if (1..=12).contains(&m) => Ok(MONTH_NAMES[m]),
        _ => Err(CalendarError::InvalidMonth { month }),
    }
}
