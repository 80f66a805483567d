use std::path::PathBuf;

use almanac_calendar::CalendarDate;
use clap::{Parser, Subcommand};

/// Almanac Gregorian date calculator.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Gregorian date arithmetic: offsets, day differences and leap years"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to an optional TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the date a number of days away from another.
    Offset(OffsetArgs),
    /// Count the whole days strictly between two dates.
    Diff(DiffArgs),
    /// Report whether a year is a leap year.
    Leap(LeapArgs),
    /// List consecutive dates.
    Range(RangeArgs),
    /// Print a date in the configured display style.
    Show(ShowArgs),
}

/// Arguments for the `offset` subcommand.
#[derive(clap::Args)]
pub struct OffsetArgs {
    /// Starting date (yyyy-mm-dd).
    pub date: CalendarDate,

    /// Number of days to move; negative values move backwards.
    #[arg(allow_negative_numbers = true)]
    pub days: i64,
}

/// Arguments for the `diff` subcommand.
#[derive(clap::Args)]
pub struct DiffArgs {
    /// Date to measure to (yyyy-mm-dd).
    pub target: CalendarDate,

    /// Date to measure from (yyyy-mm-dd).
    pub current: CalendarDate,
}

/// Arguments for the `leap` subcommand.
#[derive(clap::Args)]
pub struct LeapArgs {
    /// Year to test, as a number.
    #[arg(allow_hyphen_values = true)]
    pub year: String,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// First date of the range (yyyy-mm-dd).
    pub start: CalendarDate,

    /// Number of dates to list. Overrides `[range].days` from config.
    #[arg(short, long)]
    pub days: Option<usize>,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Date to display (yyyy-mm-dd).
    pub date: CalendarDate,
}
