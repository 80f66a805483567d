//! Leap command: leap-year test for a numeric year string.

use almanac_calendar::parse_leap_year;
use anyhow::{Context, Result};
use tracing::info_span;

use crate::cli::LeapArgs;

/// Run the leap command.
pub fn run(args: LeapArgs) -> Result<()> {
    let _cmd = info_span!("leap").entered();
    let leap = parse_leap_year(&args.year)
        .with_context(|| format!("cannot test leap year for {:?}", args.year))?;
    println!("{leap}");
    Ok(())
}
