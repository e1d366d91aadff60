//! Error types for the extraction engine

use thiserror::Error;

/// Errors that can occur while building the engine.
///
/// Extraction itself is total: once an `Extractor` is constructed, any
/// input text (including empty) yields a fully-shaped result.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A match rule failed to compile
    #[error("Invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
