//! FNOL Document Decoding
//!
//! Converts uploaded document formats into the plain text the extraction
//! core consumes. Plain-text files are read as-is; PDF documents go
//! through text extraction. Anything else is an unsupported format.
//!
//! Decode failures are this boundary's concern: the core never sees a
//! document that could not be turned into text.

#![warn(missing_docs)]

use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors reported by the decoding boundary
#[derive(Error, Debug)]
pub enum DecodeError {
    /// File type not recognized
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Document could not be converted to text
    #[error("Failed to decode document: {0}")]
    DecodeFailure(String),

    /// Failed to read the file
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),
}

/// Whether a decoded document came through a conversion step.
///
/// Converted text may carry template boilerplate worth filtering before
/// extraction; plain text is handed to the core verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrigin {
    /// Read directly from a plain-text source
    Plain,
    /// Produced by a document converter (PDF → text)
    Converted,
}

/// Decoded document text plus how it was produced
#[derive(Debug, Clone)]
pub struct DecodedText {
    /// The document body as plain text
    pub text: String,
    /// Whether a conversion step produced the text
    pub origin: TextOrigin,
}

/// Decode a file on disk, dispatching on its extension.
///
/// `.txt` files are read as UTF-8; `.pdf` files go through PDF text
/// extraction. Any other extension is [`DecodeError::UnsupportedFormat`].
pub fn decode_file(path: &Path) -> Result<DecodedText, DecodeError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    debug!(path = %path.display(), extension, "decoding document");

    match extension.as_str() {
        "txt" => Ok(DecodedText {
            text: std::fs::read_to_string(path)?,
            origin: TextOrigin::Plain,
        }),
        "pdf" => {
            let bytes = std::fs::read(path)?;
            decode_pdf(&bytes)
        }
        other => Err(DecodeError::UnsupportedFormat(other.to_string())),
    }
}

/// Decode an in-memory PDF document to text.
pub fn decode_pdf(bytes: &[u8]) -> Result<DecodedText, DecodeError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| DecodeError::DecodeFailure(e.to_string()))?;
    Ok(DecodedText {
        text,
        origin: TextOrigin::Converted,
    })
}

/// Whether a file name looks like a decodable sample
pub fn is_supported(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref(),
        Some("txt") | Some("pdf")
    )
}
