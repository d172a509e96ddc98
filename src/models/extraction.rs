//! Top-level extraction result and workout archetypes

use serde::{Deserialize, Serialize};
use std::fmt;

use super::elements::WorkoutElement;
use super::scores::ScoreElement;

/// Overall workout archetype, detected from title keywords with
/// structural fallbacks.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WorkoutType {
    /// As many rounds/reps as possible in a time window
    Amrap,

    /// Interval work repeating every fixed period
    Emom,

    /// One long list of movements worked through once
    Chipper,

    /// Fixed round count, scored by finish time
    RoundsForTime,

    /// Scored by finish time
    ForTime,

    /// Scored by total reps
    ForReps,

    /// Strength work in set×rep notation
    Lift,

    /// No recognizable archetype
    General,
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutType::Amrap => write!(f, "AMRAP"),
            WorkoutType::Emom => write!(f, "EMOM"),
            WorkoutType::Chipper => write!(f, "chipper"),
            WorkoutType::RoundsForTime => write!(f, "rounds-for-time"),
            WorkoutType::ForTime => write!(f, "for-time"),
            WorkoutType::ForReps => write!(f, "for-reps"),
            WorkoutType::Lift => write!(f, "lifting"),
            WorkoutType::General => write!(f, "general"),
        }
    }
}

/// Fully populated result of one extraction call.
///
/// Always complete: on unusable input the fields degrade to a fallback
/// title, empty lists, and a low confidence, never to a partial value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExtraction {
    /// Workout title (falls back to "Workout")
    pub title: String,

    /// Generated one-line description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered workout body
    pub elements: Vec<WorkoutElement>,

    /// Ordered recorded results
    pub scores: Vec<ScoreElement>,

    /// Extraction confidence in [0, 1]
    pub confidence: f32,
}

impl WorkoutExtraction {
    /// All movement entries, in board order
    pub fn movements(&self) -> impl Iterator<Item = &super::Movement> {
        self.elements.iter().filter_map(|e| e.as_movement())
    }
}
