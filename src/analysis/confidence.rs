//! Confidence scoring
//!
//! One score in [0, 1] combining token-level recognition confidence,
//! parse success, and structural completeness. The weights are named
//! constants; overriding them is supported but the defaults are the
//! contract.

use crate::models::{ScoreElement, WorkoutElement};

/// Weights and indicator values of the confidence formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceWeights {
    /// Weight of the mean per-token recognition confidence
    pub token_weight: f32,

    /// Weight of the parse-success indicator
    pub parse_weight: f32,

    /// Weight of the structural-completeness sum
    pub completeness_weight: f32,

    /// Parse-success value when at least one element or score was
    /// produced
    pub parse_success: f32,

    /// Parse-success value when nothing was produced
    pub parse_failure: f32,

    /// Completeness contribution of an extracted title
    pub title_bit: f32,

    /// Completeness contribution of at least one movement
    pub movement_bit: f32,

    /// Completeness contribution of at least one score
    pub score_bit: f32,

    /// Token confidence assumed when the extractor supplies none
    pub default_token_confidence: f32,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            token_weight: 0.4,
            parse_weight: 0.3,
            completeness_weight: 0.3,
            parse_success: 0.9,
            parse_failure: 0.5,
            title_bit: 0.3,
            movement_bit: 0.4,
            score_bit: 0.3,
            default_token_confidence: 0.9,
        }
    }
}

/// Compute the extraction confidence, clamped to [0, 1].
///
/// `title_extracted` is false when the title fell back to the default;
/// a fallback title contributes nothing to completeness.
pub fn score_confidence(
    weights: &ConfidenceWeights,
    token_confidences: Option<&[f32]>,
    title_extracted: bool,
    elements: &[WorkoutElement],
    scores: &[ScoreElement],
) -> f32 {
    let token_confidence = match token_confidences {
        Some(values) if !values.is_empty() => {
            values.iter().sum::<f32>() / values.len() as f32
        }
        _ => weights.default_token_confidence,
    };

    let parse_success = if elements.is_empty() && scores.is_empty() {
        weights.parse_failure
    } else {
        weights.parse_success
    };

    let has_movement = elements.iter().any(|e| e.as_movement().is_some());
    let mut completeness = 0.0;
    if title_extracted {
        completeness += weights.title_bit;
    }
    if has_movement {
        completeness += weights.movement_bit;
    }
    if !scores.is_empty() {
        completeness += weights.score_bit;
    }

    let confidence = weights.token_weight * token_confidence
        + weights.parse_weight * parse_success
        + weights.completeness_weight * completeness;
    confidence.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Movement, ScoreKind, ScoreMetadata, ScoreName};

    fn movement() -> WorkoutElement {
        WorkoutElement::Movement(Movement::new("10", "Burpees", None))
    }

    fn score() -> ScoreElement {
        ScoreElement::new(ScoreName::FinishTime, ScoreKind::Time, "4:32", ScoreMetadata::default())
    }

    #[test]
    fn test_empty_input_is_near_half() {
        let confidence =
            score_confidence(&ConfidenceWeights::default(), None, false, &[], &[]);
        assert!((confidence - 0.51).abs() < 1e-6);
    }

    #[test]
    fn test_complete_extraction_scores_high() {
        let confidence = score_confidence(
            &ConfidenceWeights::default(),
            None,
            true,
            &[movement()],
            &[score()],
        );
        // 0.4*0.9 + 0.3*0.9 + 0.3*1.0
        assert!((confidence - 0.93).abs() < 1e-6);
    }

    #[test]
    fn test_token_confidences_averaged() {
        let confidence = score_confidence(
            &ConfidenceWeights::default(),
            Some(&[1.0, 0.5]),
            true,
            &[movement()],
            &[score()],
        );
        // 0.4*0.75 + 0.3*0.9 + 0.3*1.0
        assert!((confidence - 0.87).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_hold_for_extreme_weights() {
        let mut weights = ConfidenceWeights::default();
        weights.token_weight = 5.0;
        let confidence =
            score_confidence(&weights, Some(&[1.0]), true, &[movement()], &[score()]);
        assert!(confidence <= 1.0);

        let confidence = score_confidence(
            &ConfidenceWeights::default(),
            Some(&[0.0]),
            false,
            &[],
            &[],
        );
        assert!(confidence >= 0.0);
    }

    #[test]
    fn test_minimum_only_with_no_output() {
        let empty = score_confidence(&ConfidenceWeights::default(), None, false, &[], &[]);
        let with_score =
            score_confidence(&ConfidenceWeights::default(), None, false, &[], &[score()]);
        assert!(with_score > empty);
    }
}
