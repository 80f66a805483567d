//! Consecutive date sequences.

use crate::date::CalendarDate;

/// Generates a contiguous sequence of calendar dates.
///
/// Starting from `start`, produces exactly `n_days` consecutive dates by
/// repeatedly advancing to the next day. Month, leap-day and year
/// boundaries are handled by [`CalendarDate::next`].
///
/// # Example
///
/// ```
/// use almanac_calendar::{CalendarDate, date_sequence};
///
/// let start = CalendarDate::from_parts(2024, 2, 28);
/// let dates = date_sequence(start, 3);
/// assert_eq!(dates[1], CalendarDate::from_parts(2024, 2, 29));
/// assert_eq!(dates[2], CalendarDate::from_parts(2024, 3, 1));
/// ```
pub fn date_sequence(start: CalendarDate, n_days: usize) -> Vec<CalendarDate> {
    date_iter(start).take(n_days).collect()
}

/// Returns an unbounded iterator over consecutive dates beginning at `start`.
///
/// Nothing is allocated up front, so callers can stream arbitrarily long
/// ranges with [`Iterator::take`].
///
/// ```
/// use almanac_calendar::{CalendarDate, date_iter};
///
/// let start = CalendarDate::from_parts(2023, 12, 31);
/// let next_year = date_iter(start).nth(1);
/// assert_eq!(next_year, Some(CalendarDate::from_parts(2024, 1, 1)));
/// ```
pub fn date_iter(start: CalendarDate) -> impl Iterator<Item = CalendarDate> {
    std::iter::successors(Some(start), |date| Some(date.next()))
}
