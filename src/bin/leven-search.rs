//! leven-search - fuzzy word lookup with weighted edit costs
//!
//! Logging is controlled through `RUST_LOG`, e.g. `RUST_LOG=leven_search=debug`.

use clap::Parser;
use colored::Colorize;
use std::process;

use leven_search::cli::commands;
use leven_search::cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli.command) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
