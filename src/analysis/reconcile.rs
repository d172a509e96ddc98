//! Rep-total reconciliation
//!
//! The score classifier can only guess a total from "8 + 25". Once the
//! movement list is known, the real total is rounds times the reps in
//! one full round plus the reps into the unfinished round. This pass
//! rewrites every rounds-based reps score accordingly.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{ScoreElement, ScoreKind, WorkoutElement};

lazy_static! {
    static ref SET_BY_REP: Regex = Regex::new(r"^(\d+)x(\d+)$").unwrap();
    static ref LEADING_NUMBER: Regex = Regex::new(r"^(\d+)").unwrap();
}

/// Reps contributed by one movement amount: a plain integer counts as
/// itself, a rep scheme counts its first number, and NxM notation
/// counts the product. Heights, wattages, and keywords contribute
/// nothing.
fn amount_reps(amount: &str) -> u32 {
    let amount = amount.trim();
    if let Some(caps) = SET_BY_REP.captures(amount) {
        let sets: u32 = caps[1].parse().unwrap_or(0);
        let reps: u32 = caps[2].parse().unwrap_or(0);
        return sets * reps;
    }
    if amount.chars().all(|c| c.is_ascii_digit()) {
        return amount.parse().unwrap_or(0);
    }
    if amount.contains('-') {
        if let Some(caps) = LEADING_NUMBER.captures(amount) {
            return caps[1].parse().unwrap_or(0);
        }
    }
    0
}

/// Sum of per-round reps across the movement list
pub fn reps_per_round(elements: &[WorkoutElement]) -> u32 {
    elements
        .iter()
        .filter_map(|element| element.as_movement())
        .map(|movement| amount_reps(&movement.amount))
        .sum()
}

/// Rewrite `total_reps` on every rounds-based reps score. Scores are
/// left untouched when no numeric movements were found.
pub fn reconcile_totals(elements: &[WorkoutElement], scores: &mut [ScoreElement]) {
    let per_round = reps_per_round(elements);
    if per_round == 0 {
        return;
    }

    for score in scores.iter_mut() {
        if score.kind != ScoreKind::Reps {
            continue;
        }
        let Some(metadata) = score.metadata.as_mut() else {
            continue;
        };
        if let (Some(rounds), Some(into_next)) = (metadata.rounds, metadata.reps_into_next_round) {
            let total = rounds * per_round + into_next;
            log::debug!(
                "reconciled total reps: {} rounds x {} + {} = {}",
                rounds,
                per_round,
                into_next,
                total
            );
            metadata.total_reps = Some(total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Movement, ScoreMetadata, ScoreName};

    fn movement(amount: &str) -> WorkoutElement {
        WorkoutElement::Movement(Movement::new(amount, "Burpees", None))
    }

    #[test]
    fn test_amount_reps_shapes() {
        assert_eq!(amount_reps("30"), 30);
        assert_eq!(amount_reps("21-15-9"), 21);
        assert_eq!(amount_reps("5x5"), 25);
        assert_eq!(amount_reps("Max"), 0);
        assert_eq!(amount_reps("25'"), 0);
        assert_eq!(amount_reps("200W"), 0);
    }

    #[test]
    fn test_reconciliation_rewrites_provisional_total() {
        let elements = vec![movement("30"), movement("10")];
        let mut scores = vec![ScoreElement::new(
            ScoreName::Total,
            ScoreKind::Reps,
            "8 + 25",
            ScoreMetadata {
                rounds: Some(8),
                reps_into_next_round: Some(25),
                total_reps: Some(33),
                ..Default::default()
            },
        )];

        reconcile_totals(&elements, &mut scores);
        assert_eq!(scores[0].metadata.unwrap().total_reps, Some(8 * 40 + 25));
    }

    #[test]
    fn test_no_numeric_movements_leaves_scores_alone() {
        let elements = vec![movement("Max")];
        let mut scores = vec![ScoreElement::new(
            ScoreName::Total,
            ScoreKind::Reps,
            "8 + 25",
            ScoreMetadata {
                rounds: Some(8),
                reps_into_next_round: Some(25),
                total_reps: Some(33),
                ..Default::default()
            },
        )];

        reconcile_totals(&elements, &mut scores);
        assert_eq!(scores[0].metadata.unwrap().total_reps, Some(33));
    }

    #[test]
    fn test_time_scores_untouched() {
        let elements = vec![movement("10")];
        let mut scores = vec![ScoreElement::new(
            ScoreName::FinishTime,
            ScoreKind::Time,
            "4:32",
            ScoreMetadata {
                time_in_seconds: Some(272),
                ..Default::default()
            },
        )];
        let before = scores.clone();

        reconcile_totals(&elements, &mut scores);
        assert_eq!(scores, before);
    }
}
