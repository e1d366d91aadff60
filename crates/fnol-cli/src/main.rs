//! FNOL CLI - Command-line interface for claim notice extraction and routing.

use clap::Parser;
use fnol_cli::{build_extractor, commands, Cli, Command};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> fnol_cli::Result<()> {
    let cli = Cli::parse();

    let extractor = build_extractor(cli.config.as_deref())?;

    match cli.command {
        Command::Parse(args) => commands::execute_parse(args, &extractor)?,
        Command::Batch(args) => commands::execute_batch(args, &extractor)?,
    }

    Ok(())
}
