//! Grid builder
//!
//! Splits each raw transcription line into an ordered list of trimmed,
//! non-empty field tokens. The upstream extractor separates logical
//! columns with `|`, but it is noisy: doubled, missing, and trailing
//! delimiters all occur and are collapsed here.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{GridRow, LineLabel};

/// Field delimiter emitted by the upstream extractor
pub const FIELD_DELIMITER: char = '|';

lazy_static! {
    /// Label-prefixed line convenience form: "MOVEMENT: 30 | DU" or
    /// "SCORE 8 + 25"
    static ref LABEL_PREFIX: Regex =
        Regex::new(r"^(?i)(TITLE|AITITLE|MOVEMENT|INSTRUCTION|SCORE)\s*(?::\s*|\s+)").unwrap();
}

/// Split one raw line into trimmed, non-empty fields.
/// Returns `None` when nothing remains.
pub fn build_row(line: &str) -> Option<GridRow> {
    let fields: Vec<String> = line
        .split(FIELD_DELIMITER)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect();

    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

/// Strip a leading label token from the line, if present.
///
/// Accepts both "MOVEMENT: 30 | DU" and "MOVEMENT 30 | DU". Returns the
/// remaining text and the label it carried.
pub fn strip_label_prefix(line: &str) -> (&str, Option<LineLabel>) {
    if let Some(caps) = LABEL_PREFIX.captures(line) {
        let label = LineLabel::from_token(&caps[1]);
        let rest = &line[caps.get(0).unwrap().end()..];
        if label != LineLabel::None && !rest.trim().is_empty() {
            return (rest, Some(label));
        }
    }
    (line, None)
}
