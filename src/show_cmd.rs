//! Show command: a single date in the configured display style.

use anyhow::Result;
use tracing::info_span;

use crate::cli::ShowArgs;
use crate::config::AlmanacConfig;
use crate::convert;

/// Run the show command.
pub fn run(args: ShowArgs, config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("show").entered();
    let style = convert::parse_display_style(&config.display.style)?;
    println!("{}", convert::render_date(args.date, style)?);
    Ok(())
}
