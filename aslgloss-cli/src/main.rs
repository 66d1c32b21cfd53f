//! aslgloss command-line entry point

use anyhow::Result;
use aslgloss_cli::commands::Commands;
use clap::Parser;

/// English to ASL gloss converter
#[derive(Debug, Parser)]
#[command(name = "aslgloss", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
