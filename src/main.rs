mod cli;
mod config;
mod convert;
mod diff_cmd;
mod leap_cmd;
mod logging;
mod offset_cmd;
mod range_cmd;
mod show_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AlmanacConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let load_config = || AlmanacConfig::load(cli.config.as_deref());
    match cli.command {
        Command::Offset(args) => offset_cmd::run(args),
        Command::Diff(args) => diff_cmd::run(args),
        Command::Leap(args) => leap_cmd::run(args),
        Command::Range(args) => range_cmd::run(args, &load_config()?),
        Command::Show(args) => show_cmd::run(args, &load_config()?),
    }
}
