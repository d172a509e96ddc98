//! Public extraction API
//!
//! One orchestrator folds the per-line classifiers over the input in
//! board order: title first, then the movement pass, then scores over
//! whatever the movement pass left unclaimed, then the derived passes.
//! The labeled and heuristic paths share this one pipeline; hints just
//! narrow the rules each classifier applies.

use crate::analysis::confidence::{score_confidence, ConfidenceWeights};
use crate::analysis::description::{generate_description, improve_title};
use crate::analysis::reconcile::reconcile_totals;
use crate::analysis::workout_type::detect_workout_type;
use crate::models::{GridRow, LineLabel, WorkoutExtraction};
use crate::parse::grid::{build_row, strip_label_prefix};
use crate::parse::movement::{LineOutcome, MovementClassifier};
use crate::parse::score::{ScoreClassifier, ScoreRules};
use crate::parse::title::{parse_title, TitleInfo};
use crate::parse::vocabulary::{ExerciseVocabulary, StandardVocabulary};

/// Tunable thresholds and weights of the pipeline. The defaults are
/// the contract; overriding is for experiments and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExtractorConfig {
    pub score_rules: ScoreRules,
    pub confidence: ConfidenceWeights,
}

/// Whiteboard extraction pipeline with an injected exercise
/// vocabulary.
pub struct WorkoutExtractor {
    vocabulary: Box<dyn ExerciseVocabulary + Send + Sync>,
    config: ExtractorConfig,
}

impl Default for WorkoutExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutExtractor {
    /// Extractor with the built-in vocabulary and default config
    pub fn new() -> Self {
        Self {
            vocabulary: Box::new(StandardVocabulary),
            config: ExtractorConfig::default(),
        }
    }

    /// Extractor with a custom vocabulary (house alias tables, test
    /// doubles)
    pub fn with_vocabulary(vocabulary: Box<dyn ExerciseVocabulary + Send + Sync>) -> Self {
        Self {
            vocabulary,
            config: ExtractorConfig::default(),
        }
    }

    /// Override the pipeline thresholds
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Extract a workout from raw lines and optional per-line labels.
    ///
    /// Always returns a fully populated result; unusable input
    /// degrades to the fallback title with empty lists.
    pub fn extract<S: AsRef<str>>(
        &self,
        lines: &[S],
        labels: Option<&[LineLabel]>,
    ) -> WorkoutExtraction {
        self.run(lines, labels, None)
    }

    /// Like [`WorkoutExtractor::extract`], with per-token recognition
    /// confidences reported by the upstream extractor.
    pub fn extract_with_confidences<S: AsRef<str>>(
        &self,
        lines: &[S],
        labels: Option<&[LineLabel]>,
        token_confidences: &[f32],
    ) -> WorkoutExtraction {
        self.run(lines, labels, Some(token_confidences))
    }

    fn run<S: AsRef<str>>(
        &self,
        lines: &[S],
        labels: Option<&[LineLabel]>,
        token_confidences: Option<&[f32]>,
    ) -> WorkoutExtraction {
        // Grid building: un-prefix label conveniences, split fields,
        // drop lines with nothing left
        let mut rows: Vec<(GridRow, LineLabel)> = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            let (cleaned, prefix_label) = strip_label_prefix(line.as_ref());
            let provided = labels
                .and_then(|all| all.get(index))
                .copied()
                .unwrap_or(LineLabel::None);
            let label = if provided != LineLabel::None {
                provided
            } else {
                prefix_label.unwrap_or(LineLabel::None)
            };
            if let Some(row) = build_row(cleaned) {
                rows.push((row, label));
            }
        }

        let labeled_mode = rows.iter().any(|(_, label)| *label != LineLabel::None);
        let (title_info, title_extracted, title_row) = self.select_title(&rows, labeled_mode);

        // Movement pass: fold the per-line classifier, threading the
        // pending amount; unclaimed rows queue for the score pass in
        // board order
        let classifier = MovementClassifier::new(self.vocabulary.as_ref());
        let mut elements = Vec::new();
        let mut score_rows: Vec<&GridRow> = Vec::new();
        let mut pending: Option<String> = None;

        for (index, (row, label)) in rows.iter().enumerate() {
            if label.is_title() || Some(index) == title_row {
                continue;
            }
            if *label == LineLabel::Score {
                score_rows.push(row);
                continue;
            }
            let hint = (*label != LineLabel::None).then_some(*label);
            let (outcome, carried) = classifier.classify(row, hint, pending.take());
            pending = carried;
            match outcome {
                LineOutcome::Elements(found) => elements.extend(found),
                LineOutcome::ScoreCandidate => score_rows.push(row),
                LineOutcome::Held => {}
            }
        }

        // Score pass consumes the title's time cap
        let mut score_classifier =
            ScoreClassifier::new(self.config.score_rules, title_info.time_cap_seconds);
        for row in score_rows {
            score_classifier.push_line(row);
        }
        let mut scores = score_classifier.finish();

        reconcile_totals(&elements, &mut scores);

        let workout_type = detect_workout_type(&title_info.title, &elements, &scores);
        let title = if title_info.needs_improvement {
            improve_title(&title_info.title, &elements)
        } else {
            title_info.title.clone()
        };
        let description = generate_description(workout_type, &elements);

        let confidence = score_confidence(
            &self.config.confidence,
            token_confidences,
            title_extracted,
            &elements,
            &scores,
        );

        WorkoutExtraction {
            title,
            description: Some(description),
            elements,
            scores,
            confidence,
        }
    }

    /// Title selection: AI-refined > labeled title > first grid line.
    /// Returns the parsed title, whether a real one was found, and the
    /// row index consumed (excluded from the body) if any.
    fn select_title(
        &self,
        rows: &[(GridRow, LineLabel)],
        labeled_mode: bool,
    ) -> (TitleInfo, bool, Option<usize>) {
        if rows.is_empty() {
            return (TitleInfo::fallback(), false, None);
        }

        if labeled_mode {
            if let Some(index) = rows.iter().position(|(_, l)| *l == LineLabel::AiTitle) {
                let info = parse_title(&rows[index].0.join(" "), true);
                return (info, true, Some(index));
            }
            if let Some(index) = rows.iter().position(|(_, l)| *l == LineLabel::Title) {
                let info = parse_title(&rows[index].0.join(" "), false);
                return (info, true, Some(index));
            }
            // Positional fallback; the row stays in the body when the
            // upstream labeled it as something else
            let info = parse_title(&rows[0].0.join(" "), false);
            let consumed = (rows[0].1 == LineLabel::None).then_some(0);
            return (info, true, consumed);
        }

        let info = parse_title(&rows[0].0.join(" "), false);
        (info, true, Some(0))
    }
}

/// Extract a workout with the default extractor.
pub fn extract_workout<S: AsRef<str>>(
    lines: &[S],
    labels: Option<&[LineLabel]>,
) -> WorkoutExtraction {
    WorkoutExtractor::new().extract(lines, labels)
}

/// Simplified text-only entry point: one raw multi-line string, no
/// labels, heuristic classification throughout.
pub fn extract_workout_from_text(text: &str) -> WorkoutExtraction {
    let lines: Vec<&str> = text.lines().collect();
    WorkoutExtractor::new().extract(&lines, None)
}
