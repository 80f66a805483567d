//! Range command: consecutive dates from a starting day.

use almanac_calendar::date_iter;
use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::RangeArgs;
use crate::config::AlmanacConfig;
use crate::convert::{self, DisplayStyle};

/// Run the range command.
pub fn run(args: RangeArgs, config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("range").entered();
    let style = convert::parse_display_style(&config.display.style)?;
    let n_days = args.days.unwrap_or(config.range.days);
    info!(start = %args.start, n_days, ?style, "listing dates");
    for line in render_range(&args, n_days, style) {
        println!("{}", line?);
    }
    Ok(())
}

/// Lazily renders `n_days` dates from `args.start`, one line per date.
fn render_range(
    args: &RangeArgs,
    n_days: usize,
    style: DisplayStyle,
) -> impl Iterator<Item = Result<String>> {
    date_iter(args.start)
        .take(n_days)
        .map(move |date| convert::render_date(date, style))
}
