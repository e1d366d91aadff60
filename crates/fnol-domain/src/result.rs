//! The result record produced by one extraction-and-routing pass

use crate::fields::ExtractedFields;
use crate::route::Route;
use serde::{Deserialize, Serialize};

/// Everything one pass over a document produces: the field record, the
/// missing-mandatory-field list, the inconsistency findings, the chosen
/// route, and the human-readable reasoning trail.
///
/// Owned exclusively by the caller; no identity beyond the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingResult {
    /// The extracted field record (every schema key present)
    pub extracted_fields: ExtractedFields,

    /// Mandatory fields whose value is absent or blank, in list order
    pub missing_fields: Vec<String>,

    /// Cross-field consistency findings, one string per fired rule
    pub inconsistent_fields: Vec<String>,

    /// The chosen route
    pub recommended_route: Route,

    /// Rule-selection reason, then inconsistencies, then missing fields
    pub reasoning: String,
}
