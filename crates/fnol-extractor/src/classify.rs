//! Keyword-bucket classifiers for claim type and asset type.
//!
//! Both are ordered-priority lookup tables: the first bucket whose keyword
//! list matches the document wins, and no match yields absent.

use crate::error::ExtractorError;
use fnol_domain::AssetType;
use regex::Regex;

/// Claim-type buckets in priority order: injury > theft > vehicle > property
pub(crate) const CLAIM_TYPE_BUCKETS: &[(&str, &[&str])] = &[
    ("injury", &["injury", "injured", "hospital"]),
    ("theft", &["theft", "stolen"]),
    ("vehicle", &["vehicle", "car", "truck", "motorcycle", "bike"]),
    ("property", &["property", "house", "home"]),
];

/// Asset-type buckets in priority order: vehicle-family wins over property
pub(crate) const ASSET_TYPE_BUCKETS: &[(&str, &[&str])] = &[
    ("vehicle", &["car", "vehicle", "truck", "motorcycle", "bike", "van", "auto"]),
    ("property", &["house", "home", "property", "building", "apartment", "flat"]),
];

/// A compiled ordered-priority keyword table
pub(crate) struct Buckets {
    entries: Vec<(&'static str, Regex)>,
}

impl Buckets {
    /// Compile one word-boundary pattern per bucket
    pub fn compile(table: &[(&'static str, &[&'static str])]) -> Result<Self, ExtractorError> {
        let mut entries = Vec::with_capacity(table.len());
        for (label, words) in table {
            let pattern = format!(r"(?i)\b(?:{})\b", words.join("|"));
            entries.push((*label, Regex::new(&pattern)?));
        }
        Ok(Self { entries })
    }

    /// First bucket whose keywords appear in the text
    pub fn classify(&self, text: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(label, _)| *label)
    }
}

/// Map an asset-type bucket label to its typed value
pub(crate) fn asset_type_from_label(label: &str) -> Option<AssetType> {
    match label {
        "vehicle" => Some(AssetType::Vehicle),
        "property" => Some(AssetType::Property),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injury_outranks_vehicle() {
        let buckets = Buckets::compile(CLAIM_TYPE_BUCKETS).unwrap();
        let text = "The driver of the car was injured and taken to hospital";
        assert_eq!(buckets.classify(text), Some("injury"));
    }

    #[test]
    fn test_theft_outranks_vehicle() {
        let buckets = Buckets::compile(CLAIM_TYPE_BUCKETS).unwrap();
        assert_eq!(
            buckets.classify("The car was stolen overnight"),
            Some("theft")
        );
    }

    #[test]
    fn test_no_bucket_matches() {
        let buckets = Buckets::compile(CLAIM_TYPE_BUCKETS).unwrap();
        assert_eq!(buckets.classify("General correspondence"), None);
    }

    #[test]
    fn test_word_boundaries_respected() {
        let buckets = Buckets::compile(CLAIM_TYPE_BUCKETS).unwrap();
        // "carpet" must not match "car"
        assert_eq!(buckets.classify("The carpet was ruined"), None);
    }

    #[test]
    fn test_asset_vehicle_priority() {
        let buckets = Buckets::compile(ASSET_TYPE_BUCKETS).unwrap();
        let text = "The van hit the house fence";
        assert_eq!(buckets.classify(text), Some("vehicle"));
        assert_eq!(asset_type_from_label("vehicle"), Some(AssetType::Vehicle));
    }

    #[test]
    fn test_asset_property() {
        let buckets = Buckets::compile(ASSET_TYPE_BUCKETS).unwrap();
        assert_eq!(buckets.classify("Flooding in the apartment"), Some("property"));
    }
}
