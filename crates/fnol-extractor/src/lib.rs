//! FNOL Extractor
//!
//! Converts unstructured First-Notice-of-Loss text into a structured claim
//! record and recommends a downstream processing route.
//!
//! # Overview
//!
//! The engine is a deterministic pipeline: normalize the raw text, apply an
//! ordered set of field-specific match rules (line-scoped or
//! document-scoped), resolve dates and monetary amounts into canonical
//! forms, check cross-field consistency, and run a prioritized decision
//! procedure that picks one of five routes with a human-readable reasoning
//! trail.
//!
//! # Architecture
//!
//! ```text
//! Text → Normalizer → FieldExtractor → ConsistencyChecker → RoutingEngine → RoutingResult
//! ```
//!
//! The whole pipeline is a pure, synchronous function of the input text:
//! no I/O, no clock, no hidden state. A shared `&Extractor` can serve
//! arbitrarily many concurrent callers.
//!
//! # Example Usage
//!
//! ```
//! use fnol_extractor::{EngineConfig, Extractor};
//!
//! # fn example() -> Result<(), fnol_extractor::ExtractorError> {
//! let extractor = Extractor::new(EngineConfig::default())?;
//!
//! let result = extractor.extract_and_route(
//!     "Policy Number: ABC123\nDescription: Minor collision damage to the bumper.",
//! );
//!
//! println!("Route: {}", result.recommended_route);
//! println!("Reasoning: {}", result.reasoning);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod rules;
mod dates;
mod amount;
mod classify;
mod fields;
mod consistency;
mod routing;
mod extractor;

pub mod normalize;


pub use amount::parse_amount;
pub use config::EngineConfig;
pub use dates::resolve_date;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use normalize::{compact, NoiseFilter};
