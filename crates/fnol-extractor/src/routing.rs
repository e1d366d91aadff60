//! The routing decision procedure.
//!
//! A single-pass, prioritized ladder evaluated once per document:
//! missing mandatory fields, then investigation keywords, then injury
//! claims, then the fast-track threshold comparison.

use crate::config::EngineConfig;
use fnol_domain::{ExtractedFields, FieldKey, Route};

/// The configured mandatory fields whose extracted value is absent or
/// blank, in list order.
pub(crate) fn missing_fields(fields: &ExtractedFields, config: &EngineConfig) -> Vec<String> {
    config
        .mandatory_fields
        .iter()
        .filter(|name| {
            FieldKey::parse(name).is_some_and(|key| !fields.is_present(key))
        })
        .cloned()
        .collect()
}

/// Pick a route and compose the reasoning trail.
pub(crate) fn decide(
    fields: &ExtractedFields,
    missing: &[String],
    inconsistent: &[String],
    config: &EngineConfig,
) -> (Route, String) {
    let mut reasons: Vec<String> = Vec::new();

    let route = if !missing.is_empty() {
        reasons.push("One or more mandatory fields missing".to_string());
        Route::ManualReview
    } else {
        let description = fields.description.as_deref().unwrap_or("").to_lowercase();
        let matched_keyword = config
            .investigation_keywords
            .iter()
            .find(|k| description.contains(k.as_str()));

        if let Some(keyword) = matched_keyword {
            reasons.push(format!("Description contains '{}'", keyword));
            Route::Investigation
        } else if fields
            .claim_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("injury"))
        {
            reasons.push("Claim type = injury".to_string());
            Route::SpecialistQueue
        } else if let Some(damage) = fields.estimated_damage {
            // Strict less-than: an estimate exactly at the threshold goes
            // to standard processing
            if damage < config.fast_track_threshold {
                reasons.push(format!(
                    "Estimated damage ({}) < {}",
                    damage, config.fast_track_threshold
                ));
                Route::FastTrack
            } else {
                reasons.push(format!(
                    "Estimated damage ({}) >= {}",
                    damage, config.fast_track_threshold
                ));
                Route::Standard
            }
        } else {
            reasons.push("Estimated damage unknown -> Standard processing".to_string());
            Route::Standard
        }
    };

    let mut reasoning = reasons.join(" ; ");
    if !inconsistent.is_empty() {
        reasoning.push_str(" ; Inconsistencies: ");
        reasoning.push_str(&inconsistent.join(", "));
    }
    if !missing.is_empty() {
        reasoning.push_str(" ; Missing fields: ");
        reasoning.push_str(&missing.join(", "));
    }

    (route, reasoning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnol_domain::{ContactDetails, EffectiveDates};

    fn complete_fields() -> ExtractedFields {
        ExtractedFields {
            policy_number: Some("ABC123".to_string()),
            policyholder_name: Some("Jane Doe".to_string()),
            effective_dates: Some(EffectiveDates::Range {
                from: "01-Jan-2024".to_string(),
                to: "31-Dec-2024".to_string(),
            }),
            date: Some("2024-01-05".to_string()),
            time: None,
            location: Some("Springfield".to_string()),
            description: Some("Minor collision damage to bumper.".to_string()),
            claimant: Some("Jane Doe".to_string()),
            third_parties: None,
            contact_details: ContactDetails::default(),
            asset_type: None,
            asset_id: None,
            estimated_damage: Some(5000.0),
            claim_type: Some("vehicle".to_string()),
            attachments: Some("photos.jpg".to_string()),
            initial_estimate: Some("5000".to_string()),
        }
    }

    #[test]
    fn test_missing_fields_force_manual_review() {
        let config = EngineConfig::default();
        let mut fields = complete_fields();
        fields.policy_number = None;

        let missing = missing_fields(&fields, &config);
        assert_eq!(missing, vec!["Policy Number"]);

        let (route, reasoning) = decide(&fields, &missing, &[], &config);
        assert_eq!(route, Route::ManualReview);
        assert!(reasoning.contains("mandatory fields missing"));
        assert!(reasoning.contains("Missing fields: Policy Number"));
    }

    #[test]
    fn test_investigation_keyword_wins_over_amount() {
        let config = EngineConfig::default();
        let mut fields = complete_fields();
        fields.description = Some("This looks suspicious to the adjuster.".to_string());

        let (route, reasoning) = decide(&fields, &[], &[], &config);
        assert_eq!(route, Route::Investigation);
        assert!(reasoning.contains("'suspicious'"));
    }

    #[test]
    fn test_injury_goes_to_specialist_queue() {
        let config = EngineConfig::default();
        let mut fields = complete_fields();
        fields.claim_type = Some("Injury".to_string());

        let (route, reasoning) = decide(&fields, &[], &[], &config);
        assert_eq!(route, Route::SpecialistQueue);
        assert_eq!(reasoning, "Claim type = injury");
    }

    #[test]
    fn test_fast_track_below_threshold() {
        let config = EngineConfig::default();
        let fields = complete_fields();

        let (route, reasoning) = decide(&fields, &[], &[], &config);
        assert_eq!(route, Route::FastTrack);
        assert_eq!(reasoning, "Estimated damage (5000) < 25000");
    }

    #[test]
    fn test_threshold_is_strict_less_than() {
        let config = EngineConfig::default();
        let mut fields = complete_fields();
        fields.estimated_damage = Some(25_000.0);

        let (route, reasoning) = decide(&fields, &[], &[], &config);
        assert_eq!(route, Route::Standard);
        assert_eq!(reasoning, "Estimated damage (25000) >= 25000");
    }

    #[test]
    fn test_unknown_damage_is_standard() {
        let config = EngineConfig::default();
        let mut fields = complete_fields();
        fields.estimated_damage = None;

        let (route, reasoning) = decide(&fields, &[], &[], &config);
        assert_eq!(route, Route::Standard);
        assert!(reasoning.contains("unknown"));
    }

    #[test]
    fn test_inconsistencies_appear_without_changing_route() {
        let config = EngineConfig::default();
        let fields = complete_fields();
        let inconsistent = vec!["Date is outside Effective Dates".to_string()];

        let (route, reasoning) = decide(&fields, &[], &inconsistent, &config);
        assert_eq!(route, Route::FastTrack);
        assert!(reasoning.contains("Inconsistencies: Date is outside Effective Dates"));
    }

    #[test]
    fn test_substituted_threshold_config() {
        let config = EngineConfig {
            fast_track_threshold: 1_000.0,
            ..Default::default()
        };
        let fields = complete_fields();

        let (route, _) = decide(&fields, &[], &[], &config);
        assert_eq!(route, Route::Standard);
    }
}
