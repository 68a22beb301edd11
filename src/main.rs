mod cli;
mod config;
mod curve_cmd;
mod logging;
mod workdays_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Curve(args) => curve_cmd::run(args),
        Command::Workdays(args) => workdays_cmd::run(args),
    }
}
