//! Element types for the workout body
//!
//! This module defines the line-level building blocks of a parsed
//! whiteboard: structured movements, descriptive/instructional lines,
//! and the category hints the upstream extractor may attach to lines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single input line split into an ordered list of trimmed,
/// non-empty field tokens.
pub type GridRow = Vec<String>;

/// Coarse per-line category hint supplied by the upstream extractor.
///
/// When present, hints are trusted: a `Movement` line skips the score
/// exclusion checks, a `Score` line bypasses movement classification
/// entirely. `None` means "no hint" and selects the heuristic path.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineLabel {
    /// Verbatim title line as written on the board
    Title,

    /// AI-refined title line (preferred over the verbatim one)
    AiTitle,

    /// Structured movement line (amount / exercise / unit)
    Movement,

    /// Instructional line (rest, repeat, free-text cue)
    Instruction,

    /// Score / result line
    Score,

    /// No hint for this line
    None,
}

impl LineLabel {
    /// Parse an upstream label token ("TITLE", "AITITLE", ...).
    /// Unknown tokens map to `None`.
    pub fn from_token(token: &str) -> LineLabel {
        match token.to_ascii_uppercase().as_str() {
            "TITLE" => LineLabel::Title,
            "AITITLE" => LineLabel::AiTitle,
            "MOVEMENT" => LineLabel::Movement,
            "INSTRUCTION" => LineLabel::Instruction,
            "SCORE" => LineLabel::Score,
            _ => LineLabel::None,
        }
    }

    /// Whether this label marks a title line (verbatim or AI-refined)
    pub fn is_title(&self) -> bool {
        matches!(self, LineLabel::Title | LineLabel::AiTitle)
    }
}

/// A structured exercise entry.
///
/// `amount` is kept as written: a plain count ("30"), a rep scheme
/// ("21-15-9"), set×rep notation ("5x5"), or free text ("Max").
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    /// Prescribed amount, verbatim
    pub amount: String,

    /// Normalized exercise name, always non-empty
    pub exercise: String,

    /// Optional unit or scale ("cal", "lbs", "24\"")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Movement {
    pub fn new(amount: impl Into<String>, exercise: impl Into<String>, unit: Option<String>) -> Self {
        Self {
            amount: amount.into(),
            exercise: exercise.into(),
            unit,
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} {} {}", self.amount, self.exercise, unit),
            None if self.amount.is_empty() => write!(f, "{}", self.exercise),
            None => write!(f, "{} {}", self.amount, self.exercise),
        }
    }
}

/// Kind of a descriptive (non-exercise) line
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DescriptiveKind {
    /// Prescribed rest period
    Rest,

    /// Repeat / continuation marker ("repeat", "then", "and")
    Repeat,

    /// Free-text cue or set/clock annotation
    Instruction,

    /// Unclassified descriptive text
    None,
}

/// A non-exercise instructional line.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Descriptive {
    /// Cleaned line text
    pub text: String,

    /// Classified kind
    pub kind: DescriptiveKind,

    /// Duration in seconds, when the line carries a time ("rest 1:00")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
}

impl Descriptive {
    pub fn new(text: impl Into<String>, kind: DescriptiveKind, duration_seconds: Option<u32>) -> Self {
        Self {
            text: text.into(),
            kind,
            duration_seconds,
        }
    }
}

impl fmt::Display for Descriptive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// One ordered entry of the workout body: either a structured movement
/// or a descriptive line.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum WorkoutElement {
    Movement(Movement),
    Descriptive(Descriptive),
}

impl WorkoutElement {
    /// The movement, if this element is one
    pub fn as_movement(&self) -> Option<&Movement> {
        match self {
            WorkoutElement::Movement(m) => Some(m),
            WorkoutElement::Descriptive(_) => None,
        }
    }

    /// The descriptive entry, if this element is one
    pub fn as_descriptive(&self) -> Option<&Descriptive> {
        match self {
            WorkoutElement::Movement(_) => None,
            WorkoutElement::Descriptive(d) => Some(d),
        }
    }
}
