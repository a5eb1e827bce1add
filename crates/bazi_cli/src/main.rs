mod cli;
mod commands;
mod config;
mod logging;
mod render;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let file = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Chart(args) => commands::chart(args, &file),
        Command::Dayun(args) => commands::dayun(args, &file),
        Command::Liunian(args) => commands::liunian(args, &file),
        Command::Jieqi(args) => commands::jieqi(args, &file),
        Command::Pillar(args) => commands::pillar(args),
    }
}
