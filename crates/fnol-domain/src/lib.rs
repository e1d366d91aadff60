//! FNOL Domain Layer
//!
//! This crate contains the data model for FNOL (First Notice of Loss)
//! extraction and routing. It defines the fixed field schema, the routing
//! outcome enumeration, and the result record that every extraction
//! produces.
//!
//! ## Key Concepts
//!
//! - **ExtractedFields**: the fixed schema of named claim fields; every key
//!   is always present, absent values are explicit `None` markers
//! - **FieldKey**: typed handle for one schema field, with its display name
//! - **Route**: the five-valued routing outcome
//! - **RoutingResult**: fields + missing list + inconsistency list + route +
//!   human-readable reasoning trail
//!
//! ## Architecture
//!
//! A result record is created fresh per invocation from input text and has
//! no identity or persistence beyond the call that produced it. Types here
//! serialize with stable wire names (`extractedFields`, `missingFields`,
//! `inconsistentFields`, `recommendedRoute`, `reasoning`, and the spaced
//! field names inside `extractedFields`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fields;
pub mod result;
pub mod route;

// Re-exports for convenience
pub use fields::{AssetType, ContactDetails, EffectiveDates, ExtractedFields, FieldKey};
pub use result::RoutingResult;
pub use route::Route;
