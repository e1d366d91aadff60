//! Date resolution: canonical ISO calendar form when a token parses,
//! verbatim retention when it does not.

use chrono::NaiveDate;

/// Calendar formats accepted for date tokens, tried in order.
///
/// Covers day-month-year with dash or slash separators, abbreviated and
/// full month names, ISO, and the "Month day, year" prose form.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d-%b-%Y",
    "%d-%B-%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
];

/// Try to parse a date token as a calendar date
pub(crate) fn parse_calendar(token: &str) -> Option<NaiveDate> {
    let token = token.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}

/// Normalize a date token to the canonical ISO calendar form when it
/// parses; otherwise keep the raw token verbatim.
///
/// Never fails: an unparseable token is a normal, expected outcome for
/// partially-formatted or ambiguous text.
pub fn resolve_date(token: &str) -> String {
    match parse_calendar(token) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => token.trim().to_string(),
    }
}
