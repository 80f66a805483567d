//! Proleptic Gregorian leap-year rule.

use crate::error::CalendarError;

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// A year is a leap year when it is divisible by 400, or divisible by 4 but
/// not by 100. The rule is applied uniformly to negative and zero years.
pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

/// Coerces a numeric string to a year and applies [`is_leap_year`].
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `text` is not an integer.
pub fn parse_leap_year(text: &str) -> Result<bool, CalendarError> {
    let year: i32 = text
        .trim()
        .parse()
        .map_err(|_| CalendarError::InvalidYear {
            input: text.to_string(),
        })?;
    Ok(is_leap_year(year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisible_by_400() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1600));
        assert!(is_leap_year(0));
    }

    #[test]
    fn century_not_leap() {
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn ordinary_years() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2025));
    }

    #[test]
    fn negative_years() {
        assert!(is_leap_year(-4));
        assert!(is_leap_year(-400));
        assert!(!is_leap_year(-100));
        assert!(!is_leap_year(-1));
    }

    #[test]
    fn parse_numeric_string() {
        assert_eq!(parse_leap_year("2000"), Ok(true));
        assert_eq!(parse_leap_year("1900"), Ok(false));
        assert_eq!(parse_leap_year(" 2024 "), Ok(true));
    }

    #[test]
    fn parse_non_numeric_string() {
        assert_eq!(
            parse_leap_year("twenty"),
            Err(CalendarError::InvalidYear {
                input: "twenty".to_string()
            })
        );
        assert!(parse_leap_year("").is_err());
    }
}
