//! Movement and instruction classifier
//!
//! This module provides the per-line production rules for the workout
//! body. Rules are tried in a fixed order, first match wins:
//! 1. classify(fields) - line-shape rules (rep schemes, annotations)
//! 2. classify(fields, pending) - look-back combination (a held rep
//!    scheme attaches to the next qualifying movement line)
//! 3. field-order detection for the final amount/exercise/unit read
//!
//! A line that no rule claims is handed to the score classifier.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{Descriptive, DescriptiveKind, GridRow, LineLabel, Movement, WorkoutElement};
use crate::parse::time::{is_clock, parse_clock};
use crate::parse::vocabulary::{normalize_exercise, ExerciseVocabulary};

lazy_static! {
    /// Dash-joined numeric rep scheme: "21-15-9", "1-2-3-4-5"
    static ref REP_SCHEME: Regex = Regex::new(r"^\d+(?:-\d+)+$").unwrap();

    /// Set/round-count annotation line: "5 rounds", "3 sets"
    static ref COUNT_ANNOTATION: Regex = Regex::new(r"(?i)^(\d+)\s*(?:sets?|rounds?)$").unwrap();

    /// number + number score shape: "8 + 25"
    static ref NUMBER_PLUS_NUMBER: Regex = Regex::new(r"^\d+\s*\+\s*\d+").unwrap();

    /// Date field: MM/DD/YY or MM/DD/YYYY
    static ref DATE_FIELD: Regex = Regex::new(r"^\d{1,2}/\d{1,2}/\d{2}(?:\d{2})?$").unwrap();

    /// rounds + reps phrasing: "8 rounds + 25", "8 rounds plus 25 reps"
    static ref ROUNDS_PLUS_REPS: Regex =
        Regex::new(r"(?i)\b\d+\s*rounds?\s*(?:\+|plus|and)\s*\d+").unwrap();

    /// Numbered-list marker opening a line: "3." or "3. 4:15"
    static ref NUMBERED_MARKER: Regex = Regex::new(r"^\d+\.(?:\s|$)").unwrap();

    /// Any clock inside free text
    static ref CLOCK_IN_TEXT: Regex = Regex::new(r"\b\d{1,2}:\d{2}\b").unwrap();

    /// Work:rest ratio shorthand: "1:1"
    static ref RATIO: Regex = Regex::new(r"\b\d:\d\b").unwrap();

    /// "rest MM:SS" inside a set/clock annotation line
    static ref REST_DURATION: Regex = Regex::new(r"(?i)\brest\s+(\d{1,2}:\d{2})\b").unwrap();

    /// Valid amount shapes: integer, rep scheme, NxM, quoted height,
    /// wattage, reserved keyword
    static ref AMOUNT_SHAPE: Regex =
        Regex::new(r#"(?i)^(?:\d+|\d+(?:-\d+)+|\d+x\d+|\d+'|\d+\s*w|max|min|unlimited)$"#).unwrap();

    /// Embedded descriptive phrase split out of exercise/unit fields
    static ref AFTER_EACH: Regex = Regex::new(r"(?i)\bafter\s+each\s+(?:set|round)s?\b.*$").unwrap();

    /// Legacy fallback: "<amount> <exercise> [<unit>]" in one field
    static ref LEGACY_AMOUNT_EXERCISE: Regex = Regex::new(
        r"(?i)^(\d+)\s+(.+?)(?:\s+(cal(?:orie)?s?|lbs?|kgs?|min(?:ute)?s?|sec(?:ond)?s?))?$"
    )
    .unwrap();

    /// Trailing inch measurement: `24"`
    static ref TRAILING_INCHES: Regex = Regex::new(r#"^(.*?)\s*(\d{1,2}\s*")$"#).unwrap();

    /// Trailing wattage: "200W"
    static ref TRAILING_WATTAGE: Regex = Regex::new(r"(?i)^(.*?)\s+(\d+)\s*w(?:atts?)?$").unwrap();
}

/// Short unit tokens recognized in field-order detection
const UNIT_TOKENS: &[&str] = &[
    "cal", "cals", "calorie", "calories", "lb", "lbs", "kg", "kgs", "min", "mins", "sec", "secs",
];

/// What the classifier decided about one line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Body elements produced by this line (a split line can yield two)
    Elements(Vec<WorkoutElement>),

    /// Not part of the workout body; the score classifier gets it
    ScoreCandidate,

    /// A rep scheme held as the pending amount for the next movement
    Held,
}

/// Per-line movement/instruction classifier with an injected
/// vocabulary. Stateless: the pending amount is threaded through
/// [`MovementClassifier::classify`] by the caller's fold.
pub struct MovementClassifier<'v> {
    vocabulary: &'v dyn ExerciseVocabulary,
}

impl<'v> MovementClassifier<'v> {
    pub fn new(vocabulary: &'v dyn ExerciseVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Classify one grid row. Returns the outcome and the pending
    /// amount to carry into the next line.
    pub fn classify(
        &self,
        fields: &GridRow,
        label: Option<LineLabel>,
        pending: Option<String>,
    ) -> (LineOutcome, Option<String>) {
        let joined = fields.join(" ");
        let hinted = matches!(label, Some(LineLabel::Movement) | Some(LineLabel::Instruction));
        let movement_hint = label == Some(LineLabel::Movement);

        // Rule 1: a lone rep scheme is held, not emitted
        if fields.len() == 1 && REP_SCHEME.is_match(&fields[0]) {
            log::debug!("holding rep scheme '{}'", fields[0]);
            return (LineOutcome::Held, Some(fields[0].clone()));
        }

        // Rule 2: leading dash marks a set/clock annotation
        if joined.starts_with('-') {
            let text = joined.trim_start_matches('-').trim().to_string();
            let duration = REST_DURATION
                .captures(&joined)
                .and_then(|caps| parse_clock(&caps[1]));
            let descriptive = Descriptive::new(text, DescriptiveKind::Instruction, duration);
            return (
                LineOutcome::Elements(vec![WorkoutElement::Descriptive(descriptive)]),
                pending,
            );
        }

        // Rule 3: bare set/round-count annotation
        if !movement_hint && COUNT_ANNOTATION.is_match(joined.trim()) {
            let descriptive = Descriptive::new(joined, DescriptiveKind::Instruction, None);
            return (
                LineOutcome::Elements(vec![WorkoutElement::Descriptive(descriptive)]),
                pending,
            );
        }

        // Rule 4: score shapes are excluded, unless the upstream hint
        // already settled the question
        if !hinted && Self::looks_like_score(fields, &joined) {
            return (LineOutcome::ScoreCandidate, pending);
        }

        // Rule 5: rest / repeat / continuation lines, either field order
        if let Some(descriptive) = Self::parse_rest_line(fields, &joined) {
            return (
                LineOutcome::Elements(vec![WorkoutElement::Descriptive(descriptive)]),
                pending,
            );
        }

        // Rule 6: "@" marker lines carry a clock as an instruction
        if let Some(descriptive) = Self::parse_at_line(fields, &joined) {
            return (
                LineOutcome::Elements(vec![WorkoutElement::Descriptive(descriptive)]),
                pending,
            );
        }

        // Rule 7: a lone clock belongs to scoring
        if !hinted && fields.len() == 1 && is_clock(&fields[0]) {
            return (LineOutcome::ScoreCandidate, pending);
        }

        // Rules 8-11: structured movement extraction
        match self.extract_movement(fields, &joined, pending.clone(), movement_hint) {
            Some((elements, pending_after)) => (LineOutcome::Elements(elements), pending_after),
            None if label == Some(LineLabel::Instruction) => {
                // Trusted instruction hint: keep the line as a free cue
                let duration = CLOCK_IN_TEXT
                    .find(&joined)
                    .and_then(|m| parse_clock(m.as_str()));
                let descriptive = Descriptive::new(joined, DescriptiveKind::Instruction, duration);
                (
                    LineOutcome::Elements(vec![WorkoutElement::Descriptive(descriptive)]),
                    pending,
                )
            }
            None => {
                log::debug!("line '{}' not claimed as movement", joined);
                (LineOutcome::ScoreCandidate, pending)
            }
        }
    }

    /// Rule 4 shapes: number + number, a date field, rounds+reps
    /// phrasing, or a numbered-list marker.
    fn looks_like_score(fields: &GridRow, joined: &str) -> bool {
        NUMBER_PLUS_NUMBER.is_match(joined)
            || fields.iter().any(|field| DATE_FIELD.is_match(field))
            || ROUNDS_PLUS_REPS.is_match(joined)
            || NUMBERED_MARKER.is_match(joined)
    }

    /// Rule 5: a leading rest/repeat/then/and keyword, in either
    /// field order ("rest | 1:00" or "1:00 | rest").
    fn parse_rest_line(fields: &GridRow, joined: &str) -> Option<Descriptive> {
        let leading_kind = Self::keyword_kind(&fields[0]);
        let reversed_kind = if fields.len() == 2 && (is_clock(&fields[0]) || RATIO.is_match(&fields[0])) {
            Self::keyword_kind(&fields[1])
        } else {
            None
        };

        let kind = leading_kind.or(reversed_kind)?;
        let duration = CLOCK_IN_TEXT
            .find(joined)
            .and_then(|m| parse_clock(m.as_str()))
            .or_else(|| RATIO.is_match(joined).then_some(60));

        Some(Descriptive::new(joined, kind, duration))
    }

    /// Kind for a field opening with a rest/continuation keyword
    fn keyword_kind(field: &str) -> Option<DescriptiveKind> {
        let first_word = field.split_whitespace().next()?.to_lowercase();
        match first_word.trim_matches(|c: char| !c.is_alphanumeric()) {
            "rest" => Some(DescriptiveKind::Rest),
            "repeat" => Some(DescriptiveKind::Repeat),
            "then" | "and" => Some(DescriptiveKind::Instruction),
            _ => None,
        }
    }

    /// Rule 6: first field is the literal "@" marker, optionally
    /// followed by a time.
    fn parse_at_line(fields: &GridRow, joined: &str) -> Option<Descriptive> {
        let remainder = if fields[0] == "@" {
            fields.get(1).cloned().unwrap_or_default()
        } else if let Some(rest) = fields[0].strip_prefix("@ ") {
            rest.to_string()
        } else {
            return None;
        };

        let duration = CLOCK_IN_TEXT
            .find(&remainder)
            .and_then(|m| parse_clock(m.as_str()));
        Some(Descriptive::new(
            joined.to_string(),
            DescriptiveKind::Instruction,
            duration,
        ))
    }

    /// Rules 8-11: read amount/exercise/unit off the fields, validate
    /// the amount shape, normalize the exercise, split embedded
    /// phrases. Returns the emitted elements and the surviving pending
    /// amount.
    fn extract_movement(
        &self,
        fields: &GridRow,
        joined: &str,
        pending: Option<String>,
        movement_hint: bool,
    ) -> Option<(Vec<WorkoutElement>, Option<String>)> {
        let mut consumed_pending = false;

        let (amount_raw, exercise_raw, unit_raw) = if let Some(held) = pending.as_deref() {
            // A held rep scheme supplies the amount; the first field is
            // the exercise
            consumed_pending = true;
            (
                held.to_string(),
                fields[0].clone(),
                fields.get(1).cloned(),
            )
        } else if fields.len() >= 3 && Self::is_unit_token(&fields[1]) && Self::is_long_text(&fields[2])
        {
            // Reversed order: amount | unit | exercise
            (fields[0].clone(), fields[2].clone(), Some(fields[1].clone()))
        } else if fields.len() >= 2 {
            (fields[0].clone(), fields[1].clone(), fields.get(2).cloned())
        } else {
            // Single field with no held amount: legacy patterns, then
            // bare exercise as the last resort
            return self
                .legacy_fallback(joined, movement_hint)
                .map(|elements| (elements, pending));
        };

        // A trailing clock is a score value written on the movement
        // line, never a unit
        let unit_raw = unit_raw.filter(|unit| !is_clock(unit));

        let pending_after = if consumed_pending { None } else { pending };

        // Rule 10: unrecognized amount shapes drop to legacy patterns
        if !AMOUNT_SHAPE.is_match(amount_raw.trim()) {
            return self
                .legacy_fallback(joined, movement_hint)
                .map(|elements| (elements, pending_after));
        }

        // Rule 9: split out embedded descriptive phrases
        let (exercise_raw, mut extra) = Self::split_after_each(&exercise_raw);
        let (unit_raw, unit_extra) = match unit_raw {
            Some(unit) => {
                let (kept, split) = Self::split_after_each(&unit);
                ((!kept.is_empty()).then_some(kept), split)
            }
            None => (None, None),
        };
        extra = extra.or(unit_extra);

        // Rule 11 post-processing: inch targets and wattage live inside
        // the exercise text on real boards
        let (exercise_raw, inch_unit, wattage) = Self::pull_measurements(&exercise_raw);
        let unit = unit_raw.map(|u| u.to_lowercase()).or(inch_unit);
        let amount = match wattage {
            Some(watts) if amount_raw.trim().is_empty() => watts,
            _ => amount_raw.trim().to_string(),
        };

        let exercise = normalize_exercise(self.vocabulary, &exercise_raw, false)?;

        let mut elements = vec![WorkoutElement::Movement(Movement::new(amount, exercise, unit))];
        if let Some(descriptive) = extra {
            elements.push(WorkoutElement::Descriptive(descriptive));
        }
        Some((elements, pending_after))
    }

    /// Legacy regex fallbacks for lines whose amount shape failed:
    /// "<amount> <exercise> [<unit>]" in one run of text, then a bare
    /// exercise name as the last resort.
    fn legacy_fallback(&self, joined: &str, movement_hint: bool) -> Option<Vec<WorkoutElement>> {
        if let Some(caps) = LEGACY_AMOUNT_EXERCISE.captures(joined) {
            // "315 lbs" is a weight value, not an amount and an
            // exercise called lbs
            if !Self::is_unit_token(&caps[2]) {
                let amount = caps[1].to_string();
                let unit = caps.get(3).map(|m| m.as_str().to_lowercase());
                if let Some(exercise) = normalize_exercise(self.vocabulary, &caps[2], false) {
                    return Some(vec![WorkoutElement::Movement(Movement::new(
                        amount, exercise, unit,
                    ))]);
                }
            }
        }
        self.bare_exercise(joined, movement_hint)
    }

    /// Bare exercise name with no amount. Strict vocabulary validation
    /// unless an upstream movement hint already vouched for the line.
    fn bare_exercise(&self, joined: &str, movement_hint: bool) -> Option<Vec<WorkoutElement>> {
        let (text, inch_unit, wattage) = Self::pull_measurements(joined);
        let exercise = normalize_exercise(self.vocabulary, &text, !movement_hint)?;
        let amount = wattage.unwrap_or_default();
        Some(vec![WorkoutElement::Movement(Movement::new(
            amount, exercise, inch_unit,
        ))])
    }

    /// Split an "after each set/round" phrase out of a field, keeping
    /// the remaining text.
    fn split_after_each(text: &str) -> (String, Option<Descriptive>) {
        match AFTER_EACH.find(text) {
            Some(found) => {
                let phrase = found.as_str().trim().to_string();
                let kept = text[..found.start()].trim().trim_end_matches(',').to_string();
                let duration = CLOCK_IN_TEXT
                    .find(&phrase)
                    .and_then(|m| parse_clock(m.as_str()));
                (
                    kept,
                    Some(Descriptive::new(phrase, DescriptiveKind::Instruction, duration)),
                )
            }
            None => (text.to_string(), None),
        }
    }

    /// Pull a trailing inch target out of box-like names and a trailing
    /// wattage out of bike-like names.
    fn pull_measurements(text: &str) -> (String, Option<String>, Option<String>) {
        if let Some(caps) = TRAILING_INCHES.captures(text) {
            let name = caps[1].trim().to_string();
            let lower = name.to_lowercase();
            if !name.is_empty() && (lower.contains("box") || lower.contains("step")) {
                let inches = caps[2].split_whitespace().collect::<String>();
                return (name, Some(inches), None);
            }
        }
        if let Some(caps) = TRAILING_WATTAGE.captures(text) {
            let name = caps[1].trim().to_string();
            let lower = name.to_lowercase();
            if ["bike", "ski", "row", "erg"].iter().any(|kw| lower.contains(kw)) {
                return (name, None, Some(format!("{}W", &caps[2])));
            }
        }
        (text.to_string(), None, None)
    }

    fn is_unit_token(field: &str) -> bool {
        UNIT_TOKENS.contains(&field.to_lowercase().trim_end_matches('.').trim())
    }

    /// Long text here means a plausible exercise name, not a number or
    /// unit token
    fn is_long_text(field: &str) -> bool {
        field.chars().filter(|c| c.is_alphabetic()).count() >= 2
            && !Self::is_unit_token(field)
            && !AMOUNT_SHAPE.is_match(field.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::vocabulary::StandardVocabulary;

    fn classify(line: &str, pending: Option<&str>) -> (LineOutcome, Option<String>) {
        let vocab = StandardVocabulary;
        let classifier = MovementClassifier::new(&vocab);
        let fields = crate::parse::grid::build_row(line).expect("non-empty line");
        classifier.classify(&fields, None, pending.map(str::to_string))
    }

    fn single_movement(outcome: LineOutcome) -> Movement {
        match outcome {
            LineOutcome::Elements(elements) => match elements.into_iter().next() {
                Some(WorkoutElement::Movement(m)) => m,
                other => panic!("expected movement, got {:?}", other),
            },
            other => panic!("expected elements, got {:?}", other),
        }
    }

    #[test]
    fn test_rep_scheme_is_held() {
        let (outcome, pending) = classify("21-15-9", None);
        assert_eq!(outcome, LineOutcome::Held);
        assert_eq!(pending.as_deref(), Some("21-15-9"));
    }

    #[test]
    fn test_pending_attaches_to_next_movement() {
        let (outcome, pending) = classify("Thrusters | 95 lbs", Some("21-15-9"));
        let movement = single_movement(outcome);
        assert_eq!(movement.amount, "21-15-9");
        assert_eq!(movement.exercise, "Thrusters");
        assert_eq!(movement.unit.as_deref(), Some("95 lbs"));
        assert_eq!(pending, None, "pending amount must be consumed");
    }

    #[test]
    fn test_standard_field_order() {
        let movement = single_movement(classify("30 | DU", None).0);
        assert_eq!(movement.amount, "30");
        assert_eq!(movement.exercise, "Double Unders");
        assert_eq!(movement.unit, None);
    }

    #[test]
    fn test_reversed_field_order() {
        let movement = single_movement(classify("15 | cal | ski:", None).0);
        assert_eq!(movement.amount, "15");
        assert_eq!(movement.exercise, "Ski");
        assert_eq!(movement.unit.as_deref(), Some("cal"));
    }

    #[test]
    fn test_trailing_clock_is_not_a_unit() {
        let movement = single_movement(classify("10 | bike | 4:32", None).0);
        assert_eq!(movement.exercise, "Bike");
        assert_eq!(movement.unit, None, "trailing clock is a score value");
    }

    #[test]
    fn test_rest_line() {
        let (outcome, _) = classify("rest | 1:00 |", None);
        match outcome {
            LineOutcome::Elements(elements) => {
                let descriptive = elements[0].as_descriptive().expect("descriptive");
                assert_eq!(descriptive.text, "rest 1:00");
                assert_eq!(descriptive.kind, DescriptiveKind::Rest);
                assert_eq!(descriptive.duration_seconds, Some(60));
            }
            other => panic!("expected descriptive, got {:?}", other),
        }
    }

    #[test]
    fn test_rest_line_reversed_order() {
        let (outcome, _) = classify("1:00 | rest", None);
        match outcome {
            LineOutcome::Elements(elements) => {
                let descriptive = elements[0].as_descriptive().expect("descriptive");
                assert_eq!(descriptive.kind, DescriptiveKind::Rest);
                assert_eq!(descriptive.duration_seconds, Some(60));
            }
            other => panic!("expected descriptive, got {:?}", other),
        }
    }

    #[test]
    fn test_rest_ratio_defaults_to_sixty_seconds() {
        let (outcome, _) = classify("rest 1:1", None);
        match outcome {
            LineOutcome::Elements(elements) => {
                let descriptive = elements[0].as_descriptive().expect("descriptive");
                assert_eq!(descriptive.duration_seconds, Some(60));
            }
            other => panic!("expected descriptive, got {:?}", other),
        }
    }

    #[test]
    fn test_dash_line_is_instruction_not_rest() {
        let (outcome, _) = classify("- set 2, rest 2:00", None);
        match outcome {
            LineOutcome::Elements(elements) => {
                let descriptive = elements[0].as_descriptive().expect("descriptive");
                assert_eq!(descriptive.kind, DescriptiveKind::Instruction);
                assert_eq!(descriptive.duration_seconds, Some(120));
            }
            other => panic!("expected descriptive, got {:?}", other),
        }
    }

    #[test]
    fn test_count_annotation_line() {
        let (outcome, _) = classify("5 rounds", None);
        match outcome {
            LineOutcome::Elements(elements) => {
                let descriptive = elements[0].as_descriptive().expect("descriptive");
                assert_eq!(descriptive.kind, DescriptiveKind::Instruction);
                assert_eq!(descriptive.text, "5 rounds");
            }
            other => panic!("expected descriptive, got {:?}", other),
        }
    }

    #[test]
    fn test_at_marker_line() {
        let (outcome, _) = classify("@ | 5:00", None);
        match outcome {
            LineOutcome::Elements(elements) => {
                let descriptive = elements[0].as_descriptive().expect("descriptive");
                assert_eq!(descriptive.kind, DescriptiveKind::Instruction);
                assert_eq!(descriptive.duration_seconds, Some(300));
            }
            other => panic!("expected descriptive, got {:?}", other),
        }
    }

    #[test]
    fn test_score_shapes_excluded() {
        assert_eq!(classify("8 | + | 25", None).0, LineOutcome::ScoreCandidate);
        assert_eq!(classify("11/16/25", None).0, LineOutcome::ScoreCandidate);
        assert_eq!(classify("3. | 4:15", None).0, LineOutcome::ScoreCandidate);
        assert_eq!(
            classify("8 rounds + 25 reps", None).0,
            LineOutcome::ScoreCandidate
        );
    }

    #[test]
    fn test_bare_clock_excluded() {
        assert_eq!(classify("4:32", None).0, LineOutcome::ScoreCandidate);
    }

    #[test]
    fn test_after_each_phrase_split() {
        let (outcome, _) = classify("10 | burpees after each round", None);
        match outcome {
            LineOutcome::Elements(elements) => {
                assert_eq!(elements.len(), 2);
                let movement = elements[0].as_movement().expect("movement");
                assert_eq!(movement.exercise, "Burpees");
                let descriptive = elements[1].as_descriptive().expect("instruction");
                assert_eq!(descriptive.kind, DescriptiveKind::Instruction);
                assert!(descriptive.text.starts_with("after each round"));
            }
            other => panic!("expected two elements, got {:?}", other),
        }
    }

    #[test]
    fn test_inch_target_pulled_into_unit() {
        let movement = single_movement(classify("20 | box jumps 24\"", None).0);
        assert_eq!(movement.exercise, "Box Jumps");
        assert_eq!(movement.unit.as_deref(), Some("24\""));
    }

    #[test]
    fn test_wattage_pulled_into_amount() {
        let movement = single_movement(classify("bike 200W", None).0);
        assert_eq!(movement.exercise, "Bike");
        assert_eq!(movement.amount, "200W");
    }

    #[test]
    fn test_wattage_amount_shape_accepted() {
        let movement = single_movement(classify("200W | bike", None).0);
        assert_eq!(movement.amount, "200W");
        assert_eq!(movement.exercise, "Bike");
    }

    #[test]
    fn test_max_keyword_amount() {
        let movement = single_movement(classify("Max | pull ups", None).0);
        assert_eq!(movement.amount, "Max");
        assert_eq!(movement.exercise, "Pull Ups");
    }

    #[test]
    fn test_set_by_rep_amount() {
        let movement = single_movement(classify("5x5 | back squat", None).0);
        assert_eq!(movement.amount, "5x5");
        assert_eq!(movement.exercise, "Back Squats");
    }

    #[test]
    fn test_legacy_single_field_fallback() {
        let movement = single_movement(classify("30 du", None).0);
        assert_eq!(movement.amount, "30");
        assert_eq!(movement.exercise, "Double Unders");
    }

    #[test]
    fn test_unknown_bare_text_dropped() {
        assert_eq!(classify("illegible scrawl", None).0, LineOutcome::ScoreCandidate);
    }

    #[test]
    fn test_unknown_structured_exercise_title_cased() {
        let movement = single_movement(classify("12 | sandbag carries", None).0);
        assert_eq!(movement.exercise, "Sandbag Carries");
    }

    #[test]
    fn test_movement_hint_skips_exclusions() {
        let vocab = StandardVocabulary;
        let classifier = MovementClassifier::new(&vocab);
        let fields = crate::parse::grid::build_row("30 | Double Unders").expect("row");
        let (outcome, _) = classifier.classify(&fields, Some(LineLabel::Movement), None);
        assert!(matches!(outcome, LineOutcome::Elements(_)));
    }

    #[test]
    fn test_instruction_hint_keeps_free_text() {
        let vocab = StandardVocabulary;
        let classifier = MovementClassifier::new(&vocab);
        let fields = crate::parse::grid::build_row("hold on to the bar").expect("row");
        let (outcome, _) = classifier.classify(&fields, Some(LineLabel::Instruction), None);
        match outcome {
            LineOutcome::Elements(elements) => {
                let descriptive = elements[0].as_descriptive().expect("descriptive");
                assert_eq!(descriptive.kind, DescriptiveKind::Instruction);
                assert_eq!(descriptive.text, "hold on to the bar");
            }
            other => panic!("expected descriptive, got {:?}", other),
        }
    }
}
