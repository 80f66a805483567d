//! Finding the date a given number of days away from another.

use tracing::trace;

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::month::days_in_month;

/// Days in every 400-year Gregorian cycle.
const DAYS_PER_400_YEARS: i64 = 146_097;

/// Returns the date `offset_days` whole days after `date` (before it, if negative).
///
/// The offset is added to the day field and the result is normalized one
/// month at a time: a day below 1 borrows the length of the previous month,
/// a day past the end of the month carries into the next one, and crossing
/// January/December moves the year. Whole 400-year cycles are skipped up
/// front, so the loop runs at most about 4800 times whatever the offset.
///
/// `date` is expected to be valid. Months outside 1..=12 are not rejected;
/// they are treated as 30-day months and step to December or January at
/// the first boundary crossed.
///
/// A result whose year does not fit in `i32` saturates to
/// `i32::MAX-12-31` or `i32::MIN-01-01`. Use [`checked_offset_date`] to
/// detect that case.
///
/// # Example
///
/// ```
/// use almanac_calendar::{CalendarDate, offset_date};
///
/// let leap_day = offset_date(CalendarDate::from_parts(2024, 2, 28), 1);
/// assert_eq!(leap_day, CalendarDate::from_parts(2024, 2, 29));
/// ```
pub fn offset_date(date: CalendarDate, offset_days: i64) -> CalendarDate {
    try_offset(date, offset_days).unwrap_or(if offset_days > 0 {
        CalendarDate::from_parts(i32::MAX, 12, 31)
    } else {
        CalendarDate::from_parts(i32::MIN, 1, 1)
    })
}

/// Like [`offset_date`], but fails instead of saturating.
///
/// # Errors
///
/// Returns [`CalendarError::OffsetOutOfRange`] if the resulting year does
/// not fit in `i32`.
pub fn checked_offset_date(
    date: CalendarDate,
    offset_days: i64,
) -> Result<CalendarDate, CalendarError> {
    try_offset(date, offset_days).ok_or(CalendarError::OffsetOutOfRange {
        start: date,
        offset_days,
    })
}

fn try_offset(date: CalendarDate, offset_days: i64) -> Option<CalendarDate> {
    let mut year = date.year;
    let mut month = date.month;
    let mut day = i64::from(date.day).checked_add(offset_days)?;

    if day > DAYS_PER_400_YEARS {
        let cycles = (day - 1) / DAYS_PER_400_YEARS;
        year = year.checked_add(i32::try_from(cycles * 400).ok()?)?;
        day -= cycles * DAYS_PER_400_YEARS;
    } else if day < -DAYS_PER_400_YEARS {
        let cycles = (day.unsigned_abs() / DAYS_PER_400_YEARS.unsigned_abs()) as i64;
        year = year.checked_sub(i32::try_from(cycles * 400).ok()?)?;
        day += cycles * DAYS_PER_400_YEARS;
    }
    trace!(year, month, day, "normalizing offset day");

    loop {
        if day < 1 {
            (year, month) = previous_month(year, month)?;
            day += i64::from(days_in_month(year, month));
            continue;
        }
        let month_len = i64::from(days_in_month(year, month));
        if day <= month_len {
            break;
        }
        day -= month_len;
        (year, month) = next_month(year, month)?;
    }

    // The loop exits only with 1 <= day <= 31.
    Some(CalendarDate::from_parts(year, month, day as i32))
}

fn previous_month(year: i32, month: i32) -> Option<(i32, i32)> {
    if month <= 1 {
        Some((year.checked_sub(1)?, 12))
    } else {
        Some((year, month - 1))
    }
}

fn next_month(year: i32, month: i32) -> Option<(i32, i32)> {
    if month >= 12 {
        Some((year.checked_add(1)?, 1))
    } else {
        Some((year, month + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: i32, day: i32) -> CalendarDate {
        CalendarDate::from_parts(year, month, day)
    }

    #[test]
    fn zero_is_identity() {
        for d in [date(2024, 2, 29), date(2023, 12, 31), date(1, 1, 1), date(-5, 6, 15)] {
            assert_eq!(offset_date(d, 0), d);
        }
    }

    #[test]
    fn within_month() {
        assert_eq!(offset_date(date(2024, 3, 10), 5), date(2024, 3, 15));
        assert_eq!(offset_date(date(2024, 3, 10), -9), date(2024, 3, 1));
    }

    #[test]
    fn leap_february_rollover() {
        assert_eq!(offset_date(date(2024, 2, 28), 1), date(2024, 2, 29));
        assert_eq!(offset_date(date(2024, 2, 29), 1), date(2024, 3, 1));
    }

    #[test]
    fn non_leap_february_rollover() {
        assert_eq!(offset_date(date(2023, 2, 28), 1), date(2023, 3, 1));
        assert_eq!(offset_date(date(2023, 3, 1), -1), date(2023, 2, 28));
    }

    #[test]
    fn year_rollback() {
        assert_eq!(offset_date(date(2024, 1, 1), -1), date(2023, 12, 31));
    }

    #[test]
    fn year_rollover() {
        assert_eq!(offset_date(date(2023, 12, 31), 1), date(2024, 1, 1));
    }

    #[test]
    fn thirty_day_month_boundary() {
        assert_eq!(offset_date(date(2024, 4, 30), 1), date(2024, 5, 1));
        assert_eq!(offset_date(date(2024, 5, 1), -1), date(2024, 4, 30));
    }

    #[test]
    fn multi_month_spans() {
        assert_eq!(offset_date(date(2024, 1, 31), 30), date(2024, 3, 1));
        assert_eq!(offset_date(date(2024, 1, 1), 366), date(2025, 1, 1));
        assert_eq!(offset_date(date(2023, 1, 1), 365), date(2024, 1, 1));
        assert_eq!(offset_date(date(2024, 3, 1), -366), date(2023, 3, 1));
    }

    #[test]
    fn whole_cycles_are_skipped() {
        assert_eq!(offset_date(date(2000, 1, 1), DAYS_PER_400_YEARS), date(2400, 1, 1));
        assert_eq!(offset_date(date(2400, 1, 1), -DAYS_PER_400_YEARS), date(2000, 1, 1));
        assert_eq!(
            offset_date(date(2000, 3, 1), 3 * DAYS_PER_400_YEARS + 1),
            date(3200, 3, 2)
        );
        assert_eq!(
            offset_date(date(2000, 3, 1), -(3 * DAYS_PER_400_YEARS) - 1),
            date(800, 2, 29)
        );
    }

    #[test]
    fn negative_years() {
        assert_eq!(offset_date(date(0, 1, 1), -1), date(-1, 12, 31));
        assert_eq!(offset_date(date(-4, 2, 28), 1), date(-4, 2, 29));
    }

    #[test]
    fn out_of_range_month_does_not_panic() {
        assert_eq!(offset_date(date(2024, 13, 30), 1), date(2025, 1, 1));
        assert_eq!(offset_date(date(2024, 0, 1), -1), date(2023, 12, 31));
    }

    #[test]
    fn huge_offsets_saturate() {
        let start = date(2024, 1, 1);
        assert_eq!(offset_date(start, i64::MAX), date(i32::MAX, 12, 31));
        assert_eq!(offset_date(start, i64::MIN), date(i32::MIN, 1, 1));
        assert_eq!(
            offset_date(start, 1_000_000_000_000),
            date(i32::MAX, 12, 31)
        );
        assert_eq!(offset_date(date(i32::MAX, 12, 31), 1), date(i32::MAX, 12, 31));
        assert_eq!(offset_date(date(i32::MIN, 1, 1), -1), date(i32::MIN, 1, 1));
    }

    #[test]
    fn checked_offset_reports_overflow() {
        let start = date(2024, 1, 1);
        assert_eq!(
            checked_offset_date(start, 1_000_000_000_000),
            Err(CalendarError::OffsetOutOfRange {
                start,
                offset_days: 1_000_000_000_000,
            })
        );
        assert!(checked_offset_date(start, i64::MAX).is_err());
        assert!(checked_offset_date(start, i64::MIN).is_err());
        assert!(checked_offset_date(date(i32::MAX, 12, 31), 1).is_err());
    }

    #[test]
    fn checked_offset_matches_offset_in_range() {
        let start = date(2024, 2, 29);
        for n in [-1_000_000_i64, -366, -1, 0, 1, 366, 1_000_000] {
            assert_eq!(checked_offset_date(start, n), Ok(offset_date(start, n)), "offset {n}");
        }
    }

    #[test]
    fn does_not_mutate_input() {
        let start = date(2024, 6, 15);
        let _ = offset_date(start, 100);
        assert_eq!(start, date(2024, 6, 15));
    }
}
