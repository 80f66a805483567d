//! Exclusive whole-day difference between two dates.

use std::cmp::Ordering;

use tracing::trace;

use crate::date::CalendarDate;
use crate::month::{day_of_year, days_in_month, days_in_year};

/// Returns the number of whole days strictly between `target` and `current`.
///
/// Neither endpoint is counted, so the same day and adjacent days both give
/// 0. The result is positive when `target` is after `current` and negative
/// when it is before, and `days_between(a, b) == -days_between(b, a)`.
///
/// Both dates are expected to be valid; out-of-range fields give an
/// unspecified result.
///
/// # Example
///
/// ```
/// use almanac_calendar::{CalendarDate, days_between};
///
/// let new_year = CalendarDate::from_parts(2024, 1, 1);
/// let third = CalendarDate::from_parts(2024, 1, 3);
/// assert_eq!(days_between(third, new_year), 1);
/// assert_eq!(days_between(new_year, third), -1);
/// ```
pub fn days_between(target: CalendarDate, current: CalendarDate) -> i64 {
    let days = if target.year != current.year {
        let (early, later, sign) = order(target, current, target.year > current.year);
        sign * (days_between_years(early.year + 1, later.year - 1)
            + days_from_end_year(early)
            + days_from_begin_year(later))
    } else if target.month != current.month {
        let (early, later, sign) = order(target, current, target.month > current.month);
        sign * (days_between_months(
            early.year,
            early.month.saturating_add(1),
            later.month.saturating_sub(1),
        )
            + days_from_end_month(early)
            + days_from_begin_month(later))
    } else {
        let diff = i64::from(target.day) - i64::from(current.day);
        match diff.cmp(&0) {
            Ordering::Equal => 0,
            Ordering::Greater => diff - 1,
            Ordering::Less => diff + 1,
        }
    };
    trace!(%target, %current, days, "computed day difference");
    days
}

/// Returns `(earlier, later, sign)` where `sign` is positive when `target` is later.
fn order(
    target: CalendarDate,
    current: CalendarDate,
    target_is_later: bool,
) -> (CalendarDate, CalendarDate, i64) {
    if target_is_later {
        (current, target, 1)
    } else {
        (target, current, -1)
    }
}

/// Days in the month before `date`, excluding `date` itself.
fn days_from_begin_month(date: CalendarDate) -> i64 {
    i64::from(date.day) - 1
}

/// Days in the month after `date`, excluding `date` itself.
fn days_from_end_month(date: CalendarDate) -> i64 {
    i64::from(days_in_month(date.year, date.month)) - i64::from(date.day)
}

/// Total length of months `first..=last` of `year`; zero when the range is empty.
///
/// Out-of-range month numbers are clamped to 0..=13, which keeps the loop
/// bounded for malformed dates.
fn days_between_months(year: i32, first: i32, last: i32) -> i64 {
    (first.clamp(0, 13)..=last.clamp(0, 13))
        .map(|m| i64::from(days_in_month(year, m)))
        .sum()
}

/// Days in the year before `date`, excluding `date` itself.
fn days_from_begin_year(date: CalendarDate) -> i64 {
    i64::from(day_of_year(date)) - 1
}

/// Days in the year after `date`, excluding `date` itself.
fn days_from_end_year(date: CalendarDate) -> i64 {
    i64::from(days_in_year(date.year)) - i64::from(day_of_year(date))
}

/// Total length of years `first..=last`; zero when the range is empty.
fn days_between_years(first: i32, last: i32) -> i64 {
    if last < first {
        return 0;
    }
    let (first, last) = (i64::from(first), i64::from(last));
    365 * (last - first + 1) + leap_years_through(last) - leap_years_through(first - 1)
}

/// Number of leap years in `1..=year`, extended below 1 so differences stay exact.
fn leap_years_through(year: i64) -> i64 {
    year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400)
}
