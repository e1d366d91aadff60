//! The engine: compiled rules plus configuration, and the one-shot
//! extract-and-route entry point.

use crate::config::EngineConfig;
use crate::consistency;
use crate::error::ExtractorError;
use crate::fields::extract_fields;
use crate::normalize::NoiseFilter;
use crate::routing;
use crate::rules::RuleSet;
use fnol_domain::{ExtractedFields, RoutingResult};
use tracing::debug;

/// Extracts a structured claim record from FNOL text and recommends a
/// processing route.
///
/// All patterns compile once at construction; after that every call is a
/// pure function of the input text, safe to share across concurrent
/// callers without locking.
pub struct Extractor {
    rules: RuleSet,
    noise_filter: NoiseFilter,
    config: EngineConfig,
}

impl Extractor {
    /// Create an extractor with the given configuration
    pub fn new(config: EngineConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            rules: RuleSet::compile()?,
            noise_filter: NoiseFilter::compile()?,
            config,
        })
    }

    /// Create an extractor with the default configuration
    pub fn default_config() -> Result<Self, ExtractorError> {
        Self::new(EngineConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Extract the field record from raw text
    pub fn extract(&self, text: &str) -> ExtractedFields {
        extract_fields(&self.rules, text)
    }

    /// Strip converter boilerplate from document-converted text.
    ///
    /// An optional stage for text that came out of a PDF/scan conversion;
    /// raw text input should be passed to [`extract_and_route`] as-is.
    ///
    /// [`extract_and_route`]: Extractor::extract_and_route
    pub fn strip_line_noise(&self, text: &str) -> String {
        self.noise_filter.apply(text)
    }

    /// Run the full pipeline: extract fields, find missing mandatory
    /// fields, check consistency, and pick a route with its reasoning.
    pub fn extract_and_route(&self, text: &str) -> RoutingResult {
        let extracted_fields = self.extract(text);
        let missing_fields = routing::missing_fields(&extracted_fields, &self.config);
        let inconsistent_fields = consistency::check(&extracted_fields);
        let (recommended_route, reasoning) = routing::decide(
            &extracted_fields,
            &missing_fields,
            &inconsistent_fields,
            &self.config,
        );

        debug!(
            route = recommended_route.as_str(),
            missing = missing_fields.len(),
            inconsistent = inconsistent_fields.len(),
            "routing decided"
        );

        RoutingResult {
            extracted_fields,
            missing_fields,
            inconsistent_fields,
            recommended_route,
            reasoning,
        }
    }
}
