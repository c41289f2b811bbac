mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::DooitConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = DooitConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Next(args) => commands::next(args, &config),
        Command::Zodiac(args) => commands::zodiac(args, &config),
        Command::Upcoming(args) => commands::upcoming_list(args, &config),
        Command::Conflicts(args) => commands::conflicts(args),
    }
}
