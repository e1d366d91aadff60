//! Text normalization: whole-document compaction and the line-noise filter
//! for document-converted text.

use crate::error::ExtractorError;
use regex::Regex;

/// Collapse a document into a single-line "compact" scanning view.
///
/// Carriage returns, tabs, and non-breaking spaces become ordinary spaces,
/// whitespace runs collapse to a single space, and the result is trimmed.
/// The original text (with line breaks) is kept for line-scoped matching.
pub fn compact(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        let ch = match ch {
            '\r' | '\t' | '\u{00A0}' => ' ',
            other => other,
        };
        if ch.is_whitespace() {
            pending_space = true;
        } else {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        }
    }
    out
}

/// Strips template boilerplate from text that came out of a document
/// converter: label lines, placeholder tokens, orphan numeric/dash lines.
///
/// This is an optional, explicitly invoked stage. It is idempotent and
/// total over any input, including the empty string.
pub struct NoiseFilter {
    placeholder: Regex,
    yes_no: Regex,
    numeric_only: Regex,
    caps_word: Regex,
}

impl NoiseFilter {
    /// Compile the filter patterns
    pub fn compile() -> Result<Self, ExtractorError> {
        Ok(Self {
            placeholder: Regex::new(
                r"(?i)^(PHONE|PRIMARY|SECONDARY|CELL|BUS|OWNER'S|DRIVER'S|AUTOMOBILE LOSS NOTICE|DATE OF LOSS|PHONE #|V\.I\.N\.|POLICY)$",
            )?,
            yes_no: Regex::new(r"(?i)^(Y\s*/\s*N|Y\s*N|NAI|NA)$")?,
            numeric_only: Regex::new(r"^[\d\-\s/:]{1,20}$")?,
            caps_word: Regex::new(r"^[A-Z]{2,10}$")?,
        })
    }

    /// Apply the filter, returning the cleaned text
    pub fn apply(&self, text: &str) -> String {
        let mut keep: Vec<&str> = Vec::new();

        for line in text.lines() {
            let line = line.trim();

            if line.is_empty() {
                continue;
            }
            if self.placeholder.is_match(line) {
                continue;
            }
            // Mostly-uppercase short lines are template labels
            if is_label_line(line) && line.split_whitespace().count() <= 6 {
                continue;
            }
            if self.yes_no.is_match(line) {
                continue;
            }
            // Orphan numeric/dash/slash/colon runs
            if self.numeric_only.is_match(line) {
                continue;
            }
            // Short all-caps single words (repeated section headers)
            if self.caps_word.is_match(line) && line.len() < 12 {
                continue;
            }

            keep.push(line);
        }

        // A trailing hyphen is a word-wrap break: drop it so the word
        // rejoins without an inserted space
        let mut cleaned = keep
            .iter()
            .map(|l| l.strip_suffix('-').unwrap_or(l))
            .collect::<Vec<_>>()
            .join("\n");

        cleaned = collapse_blank_lines(&cleaned);
        collapse_spaces(&cleaned).trim().to_string()
    }
}

/// More than 70% of a line's letters uppercase and a short total length
/// marks a template label or header.
fn is_label_line(line: &str) -> bool {
    let letters: Vec<char> = line.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if letters.is_empty() {
        return false;
    }
    let uppers = letters.iter().filter(|c| c.is_ascii_uppercase()).count();
    (uppers as f64 / letters.len() as f64) > 0.7 && line.len() < 80
}

fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(ch);
            }
        } else {
            newlines = 0;
            out.push(ch);
        }
    }
    out
}

fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut spaces = 0usize;
    for ch in text.chars() {
        if ch == ' ' || ch == '\t' {
            spaces += 1;
            if spaces == 1 {
                out.push(' ');
            }
        } else {
            spaces = 0;
            out.push(ch);
        }
    }
    out
}
