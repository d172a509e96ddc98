//! Score types for recorded results
//!
//! A score ties a recorded value (time, reps, weight) to a named slot:
//! a round, a set, the finish time, a total, or reps-at-time-cap.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed enumeration of score slots.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreName {
    Set1,
    Set2,
    Set3,
    Set4,
    Set5,
    Round1,
    Round2,
    Round3,
    Round4,
    Round5,
    Round6,
    Round7,
    Round8,
    Round9,
    Round10,
    FinishTime,
    Total,
    TimeCap,
    Weight,
    Other,
}

impl ScoreName {
    /// Slot for the n-th set (1-based). Out-of-range indices fall back
    /// to `Other`.
    pub fn set(n: u32) -> ScoreName {
        match n {
            1 => ScoreName::Set1,
            2 => ScoreName::Set2,
            3 => ScoreName::Set3,
            4 => ScoreName::Set4,
            5 => ScoreName::Set5,
            _ => ScoreName::Other,
        }
    }

    /// Slot for the n-th round (1-based). Out-of-range indices fall
    /// back to `Other`.
    pub fn round(n: u32) -> ScoreName {
        match n {
            1 => ScoreName::Round1,
            2 => ScoreName::Round2,
            3 => ScoreName::Round3,
            4 => ScoreName::Round4,
            5 => ScoreName::Round5,
            6 => ScoreName::Round6,
            7 => ScoreName::Round7,
            8 => ScoreName::Round8,
            9 => ScoreName::Round9,
            10 => ScoreName::Round10,
            _ => ScoreName::Other,
        }
    }

    /// Round index carried by this name, if it is a round slot
    pub fn round_index(&self) -> Option<u32> {
        match self {
            ScoreName::Round1 => Some(1),
            ScoreName::Round2 => Some(2),
            ScoreName::Round3 => Some(3),
            ScoreName::Round4 => Some(4),
            ScoreName::Round5 => Some(5),
            ScoreName::Round6 => Some(6),
            ScoreName::Round7 => Some(7),
            ScoreName::Round8 => Some(8),
            ScoreName::Round9 => Some(9),
            ScoreName::Round10 => Some(10),
            _ => None,
        }
    }
}

impl fmt::Display for ScoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreName::Set1 => write!(f, "Set 1"),
            ScoreName::Set2 => write!(f, "Set 2"),
            ScoreName::Set3 => write!(f, "Set 3"),
            ScoreName::Set4 => write!(f, "Set 4"),
            ScoreName::Set5 => write!(f, "Set 5"),
            ScoreName::FinishTime => write!(f, "Finish Time"),
            ScoreName::Total => write!(f, "Total"),
            ScoreName::TimeCap => write!(f, "Time Cap"),
            ScoreName::Weight => write!(f, "Weight"),
            ScoreName::Other => write!(f, "Other"),
            round => write!(f, "Round {}", round.round_index().unwrap_or(0)),
        }
    }
}

/// What the recorded value measures
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    Time,
    Reps,
    Weight,
    Other,
}

/// Unit of a recorded weight
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Lbs,
    Kg,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Lbs => write!(f, "lbs"),
            WeightUnit::Kg => write!(f, "kg"),
        }
    }
}

/// Structured details mined from a score line. All fields optional;
/// a score with nothing mined carries no metadata at all.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreMetadata {
    /// Time value in seconds, for time-kind scores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_seconds: Option<u32>,

    /// Completed rounds, for rounds+reps results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds: Option<u32>,

    /// Reps into the unfinished round
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps_into_next_round: Option<u32>,

    /// Total rep count (reconciled against the movement list)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_reps: Option<u32>,

    /// Weight value, for weight-kind scores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,

    /// Weight unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<WeightUnit>,

    /// Clock start, in seconds, from a start/stop phrase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u32>,

    /// Clock stop, in seconds, from a start/stop phrase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_time: Option<u32>,

    /// Elapsed round time derived from start/stop
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_time_seconds: Option<u32>,
}

impl ScoreMetadata {
    /// True when no field has been populated
    pub fn is_empty(&self) -> bool {
        *self == ScoreMetadata::default()
    }
}

/// A recorded result tied to a named slot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreElement {
    /// Named slot this result fills
    pub name: ScoreName,

    /// What the value measures
    pub kind: ScoreKind,

    /// Result value, verbatim from the board
    pub value: String,

    /// Mined structured details, when any were found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ScoreMetadata>,
}

impl ScoreElement {
    pub fn new(name: ScoreName, kind: ScoreKind, value: impl Into<String>, metadata: ScoreMetadata) -> Self {
        Self {
            name,
            kind,
            value: value.into(),
            metadata: if metadata.is_empty() { None } else { Some(metadata) },
        }
    }
}

impl fmt::Display for ScoreElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
