//! FNOL CLI library.
//!
//! Command-line interface for the FNOL extraction engine: single-document
//! parsing and batch processing of sample directories.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};

use fnol_extractor::{EngineConfig, Extractor};
use std::path::Path;

/// Build the extraction engine, optionally from a TOML rules file.
pub fn build_extractor(config_path: Option<&Path>) -> Result<Extractor> {
    let config = match config_path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            EngineConfig::from_toml(&contents).map_err(CliError::Config)?
        }
        None => EngineConfig::default(),
    };
    Ok(Extractor::new(config)?)
}
