//! Cross-field consistency checks.
//!
//! Each rule is independent and contributes at most one finding string.
//! A rule only fires when every operand is well-formed; parse failures are
//! silently skipped, never flagged.

use crate::dates::parse_calendar;
use fnol_domain::{EffectiveDates, ExtractedFields};

/// Run every consistency rule over the extracted record.
pub(crate) fn check(fields: &ExtractedFields) -> Vec<String> {
    let mut findings = Vec::new();

    // Date must fall within the effective cover period, inclusive
    if let (Some(date), Some(EffectiveDates::Range { from, to })) =
        (&fields.date, &fields.effective_dates)
    {
        if let (Some(date), Some(from), Some(to)) = (
            parse_calendar(date),
            parse_calendar(from),
            parse_calendar(to),
        ) {
            if !(from <= date && date <= to) {
                findings.push("Date is outside Effective Dates".to_string());
            }
        }
    }

    // A damage estimate cannot be negative
    if let Some(damage) = fields.estimated_damage {
        if damage < 0.0 {
            findings.push("Estimated Damage negative".to_string());
        }
    }

    findings
}
