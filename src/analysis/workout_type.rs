//! Workout archetype detection
//!
//! Title keywords are authoritative; structure is the fallback. Rules
//! are tried in a fixed order, first match wins.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{ScoreElement, ScoreKind, WorkoutElement, WorkoutType};

lazy_static! {
    static ref INTERVAL_CODE: Regex = Regex::new(r"(?i)\be\d*mom\b").unwrap();
    /// Set-by-rep notation ("5x5"); a bare "x" also appears in "Max"
    static ref SET_BY_REP: Regex = Regex::new(r"(?i)\d\s*x\s*\d").unwrap();
}

/// Detect the archetype from the title, falling back to structural
/// inference over the parsed body and scores.
pub fn detect_workout_type(
    title: &str,
    elements: &[WorkoutElement],
    scores: &[ScoreElement],
) -> WorkoutType {
    let lower = title.to_lowercase();

    if lower.contains("amrap") {
        return WorkoutType::Amrap;
    }
    if INTERVAL_CODE.is_match(&lower) || lower.contains("emom") {
        return WorkoutType::Emom;
    }
    if lower.contains("chipper") {
        return WorkoutType::Chipper;
    }
    if lower.contains("rounds for time") {
        return WorkoutType::RoundsForTime;
    }
    if lower.contains("for time") {
        return WorkoutType::ForTime;
    }
    if lower.contains("for reps") {
        return WorkoutType::ForReps;
    }

    // No keyword: infer from structure
    let movements: Vec<_> = elements.iter().filter_map(|e| e.as_movement()).collect();
    if movements.len() == 1 && SET_BY_REP.is_match(&movements[0].amount) {
        return WorkoutType::Lift;
    }

    let time_scores = scores.iter().filter(|s| s.kind == ScoreKind::Time).count();
    let reps_scores = scores.iter().filter(|s| s.kind == ScoreKind::Reps).count();
    if scores.len() == 1 && time_scores == 1 {
        return WorkoutType::ForTime;
    }
    if scores.len() == 1 && reps_scores == 1 {
        return WorkoutType::ForReps;
    }

    WorkoutType::General
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Movement, ScoreMetadata, ScoreName};

    fn movement(amount: &str) -> WorkoutElement {
        WorkoutElement::Movement(Movement::new(amount, "Deadlifts", None))
    }

    fn score(kind: ScoreKind) -> ScoreElement {
        ScoreElement::new(ScoreName::Other, kind, "x", ScoreMetadata::default())
    }

    #[test]
    fn test_title_keywords_win() {
        assert_eq!(detect_workout_type("AMRAP 10 min", &[], &[]), WorkoutType::Amrap);
        assert_eq!(detect_workout_type("E2MOM 16", &[], &[]), WorkoutType::Emom);
        assert_eq!(detect_workout_type("Saturday Chipper", &[], &[]), WorkoutType::Chipper);
        assert_eq!(
            detect_workout_type("5 rounds for time", &[], &[]),
            WorkoutType::RoundsForTime
        );
        assert_eq!(detect_workout_type("Fran, for time", &[], &[]), WorkoutType::ForTime);
        assert_eq!(detect_workout_type("Tabata for reps", &[], &[]), WorkoutType::ForReps);
    }

    #[test]
    fn test_set_by_rep_movement_infers_lift() {
        let elements = vec![movement("5x5")];
        assert_eq!(detect_workout_type("Monday", &elements, &[]), WorkoutType::Lift);
    }

    #[test]
    fn test_max_amount_is_not_a_lift() {
        let elements = vec![movement("Max")];
        assert_eq!(detect_workout_type("Monday", &elements, &[]), WorkoutType::General);
    }

    #[test]
    fn test_single_time_score_infers_for_time() {
        let scores = vec![score(ScoreKind::Time)];
        assert_eq!(detect_workout_type("Monday", &[], &scores), WorkoutType::ForTime);
    }

    #[test]
    fn test_single_reps_score_infers_for_reps() {
        let scores = vec![score(ScoreKind::Reps)];
        assert_eq!(detect_workout_type("Monday", &[], &scores), WorkoutType::ForReps);
    }

    #[test]
    fn test_no_signal_is_general() {
        assert_eq!(detect_workout_type("Monday", &[], &[]), WorkoutType::General);
    }
}
