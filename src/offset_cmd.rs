//! Offset command: the date a number of days away from another.

use almanac_calendar::checked_offset_date;
use anyhow::{Context, Result};
use tracing::{debug, info_span};

use crate::cli::OffsetArgs;

/// Run the offset command.
pub fn run(args: OffsetArgs) -> Result<()> {
    let _cmd = info_span!("offset").entered();
    let result = checked_offset_date(args.date, args.days)
        .with_context(|| format!("cannot move {} by {} days", args.date, args.days))?;
    debug!(start = %args.date, days = args.days, %result, "offset computed");
    println!("{result}");
    Ok(())
}
