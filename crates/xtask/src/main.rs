//! Development tasks for the route planner workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::Check;

/// Development tasks for the route planner workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the route planner", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run formatting, lints, and the test suite
    Check(Check),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check(cmd) => cmd.execute(),
    }
}
