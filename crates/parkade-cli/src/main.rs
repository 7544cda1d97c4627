//! Parkade - parking lot spot allocation, tickets and billing
//!
//! A CLI that replays park/exit scenarios against an in-memory lot.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
