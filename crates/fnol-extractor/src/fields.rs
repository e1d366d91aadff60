//! Field extraction: applies the rule set to produce the field record.
//!
//! Every field has an explicit fallback order, documented per field below;
//! whatever cannot be found stays an explicit absent marker.

use crate::amount::parse_amount;
use crate::classify::asset_type_from_label;
use crate::dates::resolve_date;
use crate::normalize::compact;
use crate::rules::{capture, MatchScope, RuleSet};
use fnol_domain::{ContactDetails, EffectiveDates, ExtractedFields};

/// Run the full field extraction over one document.
pub(crate) fn extract_fields(rules: &RuleSet, raw: &str) -> ExtractedFields {
    use MatchScope::{Document, Line};

    let compact_text = compact(raw);
    let mut fields = ExtractedFields::default();

    // Policy info
    fields.policy_number = capture(Line, &rules.policy_number, raw);
    fields.policyholder_name = capture(Line, &rules.policyholder_name, raw);
    fields.effective_dates = extract_effective_dates(rules, raw);

    // Loss date and time
    fields.date = extract_date(rules, raw);
    fields.time = capture(Line, &rules.time, raw);

    // Location: labeled line, else an "at <place>" phrase anywhere
    fields.location = capture(Line, &rules.location_line, raw)
        .or_else(|| capture(Document, &rules.location_at, raw));

    fields.description = extract_description(rules, raw);

    // Parties & contact
    fields.claimant =
        capture(Line, &rules.claimant, raw).or_else(|| fields.policyholder_name.clone());
    fields.third_parties = capture(Line, &rules.third_party, raw);
    fields.contact_details = ContactDetails {
        email: capture(Document, &rules.email, raw),
        phone: capture(Line, &rules.phone_line, raw)
            .or_else(|| capture(Document, &rules.phone_any, raw)),
    };

    // Asset
    fields.asset_type = rules
        .asset_type_buckets
        .classify(&compact_text)
        .and_then(asset_type_from_label);
    fields.asset_id = capture(Line, &rules.asset_id, raw);

    // Estimates: one labeled match feeds both the parsed number and the
    // raw text; the raw "Initial Estimate" line is the fallback
    let estimate_raw = capture(Line, &rules.estimate_line, raw);
    fields.estimated_damage = estimate_raw.as_deref().and_then(parse_amount);
    fields.initial_estimate =
        estimate_raw.or_else(|| capture(Line, &rules.initial_estimate_line, raw));

    // Claim type: explicit label, else the keyword classifier
    fields.claim_type = capture(Line, &rules.claim_type_line, raw).or_else(|| {
        rules
            .claim_type_buckets
            .classify(&compact_text)
            .map(str::to_string)
    });

    // Attachments: labeled line, else the literal marker when the document
    // mentions attachments anywhere
    fields.attachments = capture(Line, &rules.attachments_line, raw).or_else(|| {
        rules
            .attachments_any
            .is_match(&compact_text)
            .then(|| "Yes".to_string())
    });

    fields
}

/// Effective dates: structured {from, to} when the line remainder holds two
/// date-like tokens joined by "to" or "-", else the raw remainder.
fn extract_effective_dates(rules: &RuleSet, raw: &str) -> Option<EffectiveDates> {
    let remainder = capture(MatchScope::Line, &rules.effective_line, raw)?;
    if let Some(caps) = rules.date_range.captures(&remainder) {
        return Some(EffectiveDates::Range {
            from: caps[1].trim().to_string(),
            to: caps[2].trim().to_string(),
        });
    }
    Some(EffectiveDates::Raw(remainder))
}

/// Date of loss: a date-token sub-pattern searched inside the labeled line
/// remainder; the whole remainder stands in when no sub-token matches.
/// The token is then normalized to the canonical calendar form when it
/// parses, and kept verbatim when it does not.
fn extract_date(rules: &RuleSet, raw: &str) -> Option<String> {
    let remainder = capture(MatchScope::Line, &rules.date_line, raw)?;
    let token = rules
        .date_token
        .find(&remainder)
        .map(|m| m.as_str().to_string())
        .unwrap_or(remainder);
    Some(resolve_date(&token))
}

/// Description: a labeled block truncated at the next blank line, else the
/// first paragraph containing an incident keyword.
fn extract_description(rules: &RuleSet, raw: &str) -> Option<String> {
    if let Some(caps) = rules.description_block.captures(raw) {
        let block = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let first = rules
            .paragraph_split
            .split(block)
            .next()
            .unwrap_or(block)
            .trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }

    rules
        .paragraph_split
        .split(raw)
        .find(|p| rules.description_keywords.is_match(p))
        .map(|p| p.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnol_domain::AssetType;

    fn rules() -> RuleSet {
        RuleSet::compile().unwrap()
    }

    #[test]
    fn test_effective_dates_range() {
        let fields = extract_fields(&rules(), "Effective Dates: 01-Jan-2024 to 31-Dec-2024");
        assert_eq!(
            fields.effective_dates,
            Some(EffectiveDates::Range {
                from: "01-Jan-2024".to_string(),
                to: "31-Dec-2024".to_string(),
            })
        );
    }

    #[test]
    fn test_effective_dates_raw_fallback() {
        let fields = extract_fields(&rules(), "Effective Dates: current policy year");
        assert_eq!(
            fields.effective_dates,
            Some(EffectiveDates::Raw("current policy year".to_string()))
        );
    }

    #[test]
    fn test_date_token_inside_line() {
        let fields = extract_fields(&rules(), "Date of Loss: around 05/01/2024 in the evening");
        assert_eq!(fields.date.as_deref(), Some("2024-01-05"));
    }

    #[test]
    fn test_unparseable_date_kept_verbatim() {
        let fields = extract_fields(&rules(), "Date: sometime last week");
        assert_eq!(fields.date.as_deref(), Some("sometime last week"));
    }

    #[test]
    fn test_claimant_falls_back_to_policyholder() {
        let fields = extract_fields(&rules(), "Policyholder Name: Jane Doe");
        assert_eq!(fields.claimant.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_description_labeled_block_stops_at_blank_line() {
        let text = "Description: The vehicle skidded on ice and hit the barrier.\n\nClaimant: Jane Doe";
        let fields = extract_fields(&rules(), text);
        assert_eq!(
            fields.description.as_deref(),
            Some("The vehicle skidded on ice and hit the barrier.")
        );
    }

    #[test]
    fn test_description_keyword_paragraph_fallback() {
        let text = "Dear adjuster,\n\nThere was a collision near the bridge last night.\n\nRegards";
        let fields = extract_fields(&rules(), text);
        assert_eq!(
            fields.description.as_deref(),
            Some("There was a collision near the bridge last night.")
        );
    }

    #[test]
    fn test_contact_details_email_and_phone() {
        let text = "Phone: +1 555-123-4567\nReach jane@example.com for photos";
        let fields = extract_fields(&rules(), text);
        assert_eq!(fields.contact_details.email.as_deref(), Some("jane@example.com"));
        assert_eq!(fields.contact_details.phone.as_deref(), Some("+1 555-123-4567"));
    }

    #[test]
    fn test_asset_type_vehicle_priority() {
        let fields = extract_fields(&rules(), "The truck crashed into the house gate");
        assert_eq!(fields.asset_type, Some(AssetType::Vehicle));
    }

    #[test]
    fn test_asset_id_from_vin_label() {
        let fields = extract_fields(&rules(), "VIN: 1HGCM82633A004352");
        assert_eq!(fields.asset_id.as_deref(), Some("1HGCM82633A004352"));
    }

    #[test]
    fn test_estimate_feeds_both_fields() {
        let fields = extract_fields(&rules(), "Estimated Damage: ₹12,500.50");
        assert_eq!(fields.estimated_damage, Some(12500.5));
        assert_eq!(fields.initial_estimate.as_deref(), Some("12,500.50"));
    }

    #[test]
    fn test_claim_type_classifier_fallback() {
        let fields = extract_fields(&rules(), "The bicycle was stolen from the garage");
        assert_eq!(fields.claim_type.as_deref(), Some("theft"));
    }

    #[test]
    fn test_attachments_marker_fallback() {
        let fields = extract_fields(&rules(), "Photos of the damage are enclosed");
        assert_eq!(fields.attachments.as_deref(), Some("Yes"));
    }

    #[test]
    fn test_empty_input_yields_default_shape() {
        let fields = extract_fields(&rules(), "");
        assert_eq!(fields, ExtractedFields::default());
    }
}
