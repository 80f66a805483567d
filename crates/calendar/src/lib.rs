//! # almanac-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["yyyy-mm-dd"] -->|"parse_date()"| B["CalendarDate"]
//!     B -->|"format_date()"| A
//!     B -->|"offset_date()"| B
//!     B -->|"days_between()"| C["exclusive day count"]
//!     B -->|"weekday() / long_date()"| D["display names"]
//!     B -->|"date_sequence() / date_iter()"| E["consecutive dates"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::{CalendarDate, days_between, format_date, is_leap_year, offset_date, parse_date};
//!
//! let date = parse_date("2024-02-28").unwrap();
//! assert_eq!(format_date(offset_date(date, 1)), "2024-02-29");
//! assert!(is_leap_year(2024));
//!
//! // Whole days strictly between the two dates.
//! let later = CalendarDate::from_parts(2024, 3, 2);
//! assert_eq!(days_between(later, date), 2);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | `CalendarDate` value type, validation and strict parsing |
//! | `format` | Lenient `yyyy-mm-dd` parsing and formatting |
//! | `leap` | Leap-year rule |
//! | `month` | Month lengths, day-of-year and month names |
//! | `offset` | Date N days away |
//! | `diff` | Exclusive day difference |
//! | `weekday` | Day of the week and long date form |
//! | `sequence` | Consecutive date sequences |
//! | `error` | Error types |
//!
//! Every function is pure and may be called from any thread.

mod date;
mod diff;
mod error;
mod format;
mod leap;
mod month;
mod offset;
mod sequence;
mod weekday;

pub use date::CalendarDate;
pub use diff::days_between;
pub use error::CalendarError;
pub use format::{DateInput, format_date, format_date_parts, parse_date};
pub use leap::{is_leap_year, parse_leap_year};
pub use month::{day_of_year, days_in_month, days_in_year, month_name};
pub use offset::{checked_offset_date, offset_date};
pub use sequence::{date_iter, date_sequence};
pub use weekday::{Weekday, long_date, weekday};
