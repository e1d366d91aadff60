//! Configuration for the extraction engine

use fnol_domain::FieldKey;
use serde::{Deserialize, Serialize};

/// Read-only configuration for extraction and routing.
///
/// The defaults are the process-wide constants of the reference behavior;
/// test suites may substitute alternates without touching global state.
/// The engine never mutates a config after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fields whose absence forces the Manual review route, by display name
    #[serde(default = "default_mandatory_fields")]
    pub mandatory_fields: Vec<String>,

    /// Lowercase keywords that send a description to Investigation
    #[serde(default = "default_investigation_keywords")]
    pub investigation_keywords: Vec<String>,

    /// Estimated-damage boundary below which a claim is fast-tracked
    #[serde(default = "default_fast_track_threshold")]
    pub fast_track_threshold: f64,
}

fn default_mandatory_fields() -> Vec<String> {
    [
        FieldKey::PolicyNumber,
        FieldKey::PolicyholderName,
        FieldKey::EffectiveDates,
        FieldKey::Date,
        FieldKey::Location,
        FieldKey::Description,
        FieldKey::Claimant,
        FieldKey::ClaimType,
        FieldKey::Attachments,
        FieldKey::InitialEstimate,
    ]
    .iter()
    .map(|k| k.name().to_string())
    .collect()
}

fn default_investigation_keywords() -> Vec<String> {
    ["fraud", "fraudulent", "staged", "inconsistent", "suspect", "suspicious"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_fast_track_threshold() -> f64 {
    25_000.0
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mandatory_fields: default_mandatory_fields(),
            investigation_keywords: default_investigation_keywords(),
            fast_track_threshold: default_fast_track_threshold(),
        }
    }
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for name in &self.mandatory_fields {
            if FieldKey::parse(name).is_none() {
                return Err(format!("Unknown mandatory field: {}", name));
            }
        }
        for keyword in &self.investigation_keywords {
            if keyword.trim().is_empty() {
                return Err("Investigation keywords must be non-empty".to_string());
            }
            if *keyword != keyword.to_lowercase() {
                return Err(format!(
                    "Investigation keyword '{}' must be lowercase",
                    keyword
                ));
            }
        }
        if !self.fast_track_threshold.is_finite() || self.fast_track_threshold <= 0.0 {
            return Err("fast_track_threshold must be a positive number".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
