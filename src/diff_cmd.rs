//! Diff command: whole days strictly between two dates.

use almanac_calendar::days_between;
use anyhow::Result;
use tracing::{debug, info_span};

use crate::cli::DiffArgs;

/// Run the diff command.
pub fn run(args: DiffArgs) -> Result<()> {
    let _cmd = info_span!("diff").entered();
    let days = days_between(args.target, args.current);
    debug!(target_date = %args.target, current_date = %args.current, days, "difference computed");
    println!("{days}");
    Ok(())
}
