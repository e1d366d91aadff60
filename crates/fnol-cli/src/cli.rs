//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// FNOL CLI - Extract and route claim notices from the command line.
#[derive(Debug, Parser)]
#[command(name = "fnol")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Engine configuration file (TOML); defaults to the built-in rules
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract and route a single document, printing the result as JSON
    Parse(ParseArgs),

    /// Process every supported document in a directory
    Batch(BatchArgs),
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Document to process (.txt or .pdf)
    pub file: PathBuf,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Directory containing .txt and .pdf documents
    pub dir: PathBuf,

    /// Where to write per-document results; defaults to the input directory
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}
