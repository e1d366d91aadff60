//! The compiled field-match rule set.
//!
//! Two match scopes exist: line-scoped rules are evaluated against each
//! line of the raw text independently (first hit wins), which keeps a
//! pattern from spanning unrelated lines; document-scoped rules run
//! against the whole compacted text, for values that are not reliably
//! confined to one line (email addresses, keyword scans).

use crate::classify::Buckets;
use crate::error::ExtractorError;
use regex::{Captures, Regex};

/// Where a rule's pattern is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchScope {
    /// Each line independently, first hit wins
    Line,
    /// The whole compacted document
    Document,
}

/// Every field pattern, compiled once at engine construction.
pub(crate) struct RuleSet {
    pub policy_number: Regex,
    pub policyholder_name: Regex,
    pub effective_line: Regex,
    pub date_range: Regex,
    pub date_line: Regex,
    pub date_token: Regex,
    pub time: Regex,
    pub location_line: Regex,
    pub location_at: Regex,
    pub description_block: Regex,
    pub description_keywords: Regex,
    pub paragraph_split: Regex,
    pub claimant: Regex,
    pub third_party: Regex,
    pub email: Regex,
    pub phone_line: Regex,
    pub phone_any: Regex,
    pub asset_id: Regex,
    pub estimate_line: Regex,
    pub initial_estimate_line: Regex,
    pub claim_type_line: Regex,
    pub attachments_line: Regex,
    pub attachments_any: Regex,
    pub claim_type_buckets: Buckets,
    pub asset_type_buckets: Buckets,
}

impl RuleSet {
    /// Compile the full rule set
    pub fn compile() -> Result<Self, ExtractorError> {
        Ok(Self {
            policy_number: Regex::new(
                r"(?i)\bPolicy(?:\s*No\.?|\s*Number)?\s*:?\s*([A-Z0-9/-]+)",
            )?,
            policyholder_name: Regex::new(
                r"(?i)\bPolicyholder(?: Name)?\s*:?\s*([A-Za-z ,.'-]{2,100})$",
            )?,
            effective_line: Regex::new(r"(?i)\bEffective(?: Dates| Date)?\s*:?\s*(.+)")?,
            date_range: Regex::new(
                r"(?i)([0-3]?\d[-/][A-Za-z0-9-]+)\s*(?:to|-)\s*([0-3]?\d[-/][A-Za-z0-9-]+)",
            )?,
            date_line: Regex::new(r"(?i)\b(?:Date of Loss|Date)\s*:?\s*(.+)")?,
            date_token: Regex::new(
                r"(?i)([0-3]?\d[-/][A-Za-z0-9-]+[-/]\d{2,4}|\d{4}-\d{2}-\d{2}|\b[A-Za-z]{3,9}\s+\d{1,2},?\s*\d{2,4}\b)",
            )?,
            time: Regex::new(
                r"(?i)\b(?:Time of Loss|Time)\s*:?\s*([0-2]?\d[:.][0-5]\d(?:\s*[APMapm]{2})?)",
            )?,
            location_line: Regex::new(r"(?i)\bLocation\s*:?\s*(.+)")?,
            location_at: Regex::new(r"(?i)\bat\s+([A-Z][A-Za-z0-9 ,-]+)")?,
            description_block: Regex::new(
                r"(?is)(?:Description|Incident Description|Details)\s*:?\s*(.{20,1200})",
            )?,
            description_keywords: Regex::new(
                r"(?i)\b(loss|damage|incident|collision|theft|injury|stolen)\b",
            )?,
            paragraph_split: Regex::new(r"\r?\n\r?\n")?,
            claimant: Regex::new(
                r"(?i)(?:Claimant|Insured|Complainant)\s*:?\s*([A-Za-z ,.'-]{2,100})$",
            )?,
            third_party: Regex::new(r"(?i)\bThird(?: |-)?Party\s*:?\s*(.+)")?,
            email: Regex::new(r"[\w.-]+@[\w.-]+\.\w+")?,
            phone_line: Regex::new(r"(?i)\b(?:Phone|Contact|Tel|Mobile)\s*:?\s*([+\d\-\s()]{7,20})")?,
            phone_any: Regex::new(r"(\+?\d[\d\-\s()]{6,}\d)")?,
            asset_id: Regex::new(r"(?i)(?:Asset\s*ID|VIN|Registration|Reg\.?)\s*:?\s*([A-Z0-9-]{3,50})")?,
            estimate_line: Regex::new(
                r"(?i)(?:Estimated\s+Damage|Initial Estimate|Estimate|Estimated\s+Loss)\s*:?\s*[₹$€£]?\s*([\d,]+(?:\.\d{1,2})?)",
            )?,
            initial_estimate_line: Regex::new(r"(?i)\bInitial Estimate\s*:?\s*(.+)")?,
            claim_type_line: Regex::new(
                r"(?i)(?:Claim\s*Type|Type of Claim)\s*:?\s*([A-Za-z ]{3,30})$",
            )?,
            attachments_line: Regex::new(r"(?i)(?:Attachments|Attached)\s*:?\s*(.+)$")?,
            attachments_any: Regex::new(
                r"(?i)\b(attachments|attached|photos|images|police report|fir)\b",
            )?,
            claim_type_buckets: Buckets::compile(crate::classify::CLAIM_TYPE_BUCKETS)?,
            asset_type_buckets: Buckets::compile(crate::classify::ASSET_TYPE_BUCKETS)?,
        })
    }
}

/// Evaluate a pattern in the given scope. Line scope takes the first line
/// that matches; document scope runs one search over the whole text.
pub(crate) fn capture(scope: MatchScope, re: &Regex, text: &str) -> Option<String> {
    match scope {
        MatchScope::Line => text
            .lines()
            .filter_map(|line| re.captures(line))
            .next()
            .and_then(hit),
        MatchScope::Document => re.captures(text).and_then(hit),
    }
}

/// First capturing group when it matched non-empty, else the whole match.
/// A capture that trims to nothing counts as no value at all, so a bare
/// label line falls through to the field's fallback chain.
fn hit(caps: Captures<'_>) -> Option<String> {
    let text = caps
        .get(1)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| caps.get(0).map(|m| m.as_str()).unwrap_or_default());
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
