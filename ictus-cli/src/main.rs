//! Command-line entry point for ictus

use anyhow::Result;
use clap::Parser;
use ictus_cli::commands::Commands;

/// Mark stressed vowels in plain Latin verse using a macron-marked reference text
#[derive(Debug, Parser)]
#[command(name = "ictus", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
