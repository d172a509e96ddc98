//! Score classifier
//!
//! Lines the movement classifier leaves unclaimed land here. A small
//! state machine walks them in board order, carrying the running
//! round/set index and the time cap announced by the title, and emits
//! named [`ScoreElement`]s. Every numeric threshold that steers a
//! decision is a named, overridable constant on [`ScoreRules`].

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{GridRow, ScoreElement, ScoreKind, ScoreMetadata, ScoreName, WeightUnit};
use crate::parse::time::{format_time, is_clock, is_concatenated_clock, parse_clock, parse_seconds};

lazy_static! {
    static ref DATE_FIELD: Regex = Regex::new(r"^\d{1,2}/\d{1,2}/\d{2}(?:\d{2})?$").unwrap();
    static ref ROUND_SET_LABEL: Regex =
        Regex::new(r"(?i)^(round|set)\s*(\d+)\s*:?\s*(.*)$").unwrap();
    static ref NUMBERED_MARKER: Regex = Regex::new(r"^(\d+)\.\s*(.*)$").unwrap();
    static ref START_STOP: Regex =
        Regex::new(r"(?i)start:?\s*(\d{1,2}:\d{2})\D*?stop:?\s*(\d{1,2}:\d{2})").unwrap();
    static ref ROUNDS_PLUS_REPS: Regex =
        Regex::new(r"(?i)^(\d+)(?:\s*rounds?)?\s*(?:\+|plus|and)\s*(\d+)(?:\s*reps?)?$").unwrap();
    static ref WEIGHT_VALUE: Regex = Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*(lbs?|kgs?)$").unwrap();
    static ref CAP_WORD: Regex = Regex::new(r"(?i)\bcap(?:ped)?\b").unwrap();
    static ref REST_WORD: Regex = Regex::new(r"(?i)^(rest|repeat|then|and)\b").unwrap();
}

/// Named thresholds of the score classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRules {
    /// Lone integers at or above this many seconds-equivalent read as
    /// times; below it they are rep counts
    pub reps_time_cutoff: u32,

    /// Start/stop deltas this many seconds negative are clamped to
    /// zero (clock jitter); worse is read as an hour rollover
    pub start_stop_tolerance: u32,

    /// Weight-with-unit values must exceed this to be weight scores
    pub weight_minimum: u32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            reps_time_cutoff: 60,
            start_stop_tolerance: 5,
            weight_minimum: 50,
        }
    }
}

/// Stateful walk over unclaimed lines, in board order.
pub struct ScoreClassifier {
    rules: ScoreRules,
    time_cap: Option<u32>,
    set_index: Option<u32>,
    scores: Vec<ScoreElement>,
}

impl ScoreClassifier {
    pub fn new(rules: ScoreRules, time_cap: Option<u32>) -> Self {
        Self {
            rules,
            time_cap,
            set_index: None,
            scores: Vec::new(),
        }
    }

    /// Classify one line. Lines that match no rule are dropped.
    pub fn push_line(&mut self, fields: &GridRow) {
        let joined = fields.join(" ");

        // Section headers and descriptive lines are not results
        if Self::is_section_header(fields, &joined) || Self::is_descriptive(&joined) {
            return;
        }

        // Dates are metadata only, never time values
        let mut working: Vec<String> = fields
            .iter()
            .filter(|field| !DATE_FIELD.is_match(field))
            .cloned()
            .collect();
        if working.is_empty() {
            return;
        }

        // Explicit "Round n:" / "Set n:" labels switch the running
        // index, then the remainder is parsed as usual
        let mut explicit_round: Option<u32> = None;
        let first = working[0].clone();
        if let Some(caps) = ROUND_SET_LABEL.captures(&first) {
            let n: u32 = caps[2].parse().unwrap_or(0);
            if caps[1].eq_ignore_ascii_case("set") {
                self.set_index = Some(n);
            } else {
                explicit_round = Some(n);
            }
            let remainder = caps[3].trim().to_string();
            if remainder.is_empty() {
                working.remove(0);
            } else {
                working[0] = remainder;
            }
            if working.is_empty() {
                return;
            }
        }

        // Numbered-list form "N. | value" names the round explicitly
        let first = working[0].clone();
        if let Some(caps) = NUMBERED_MARKER.captures(&first) {
            explicit_round = Some(caps[1].parse().unwrap_or(0));
            let remainder = caps[2].trim().to_string();
            if remainder.is_empty() {
                working.remove(0);
            } else {
                working[0] = remainder;
            }
            if working.is_empty() {
                return;
            }
        }

        let value_text = working.join(" ");
        let capped_line = CAP_WORD.is_match(&value_text);

        // start/stop phrases carry their own elapsed time
        if let Some(caps) = START_STOP.captures(&value_text) {
            if let (Some(start), Some(stop)) = (parse_clock(&caps[1]), parse_clock(&caps[2])) {
                let delta = self.start_stop_delta(start, stop);
                let metadata = ScoreMetadata {
                    time_in_seconds: Some(delta),
                    start_time: Some(start),
                    stop_time: Some(stop),
                    round_time_seconds: Some(delta),
                    ..Default::default()
                };
                self.emit(ScoreKind::Time, format_time(delta), metadata, explicit_round, false);
                return;
            }
        }

        // A trailing bare clock wins even when earlier fields look like
        // something else
        if let Some(last) = working.last() {
            if is_clock(last) {
                if let Some(seconds) = parse_clock(last).filter(|s| *s < 3600) {
                    let metadata = ScoreMetadata {
                        time_in_seconds: Some(seconds),
                        ..Default::default()
                    };
                    let value = last.clone();
                    self.emit(ScoreKind::Time, value, metadata, explicit_round, capped_line);
                    return;
                }
            }
        }

        // rounds + reps: "8 + 25", "8 rounds + 25 reps"
        if let Some(caps) = ROUNDS_PLUS_REPS.captures(&value_text) {
            let rounds: u32 = caps[1].parse().unwrap_or(0);
            let reps: u32 = caps[2].parse().unwrap_or(0);
            let metadata = ScoreMetadata {
                rounds: Some(rounds),
                reps_into_next_round: Some(reps),
                // Provisional; the reconciler rewrites this from the
                // movement list
                total_reps: Some(rounds + reps),
                ..Default::default()
            };
            self.emit(
                ScoreKind::Reps,
                format!("{} + {}", rounds, reps),
                metadata,
                explicit_round,
                capped_line,
            );
            return;
        }

        // Weight with an explicit unit
        if let Some(caps) = WEIGHT_VALUE.captures(&value_text) {
            let value: f64 = caps[1].parse().unwrap_or(0.0);
            if value > f64::from(self.rules.weight_minimum) {
                let unit = if caps[2].to_lowercase().starts_with("lb") {
                    WeightUnit::Lbs
                } else {
                    WeightUnit::Kg
                };
                let metadata = ScoreMetadata {
                    weight: Some(value.round() as u32),
                    unit: Some(unit),
                    ..Default::default()
                };
                self.emit(ScoreKind::Weight, value_text, metadata, explicit_round, capped_line);
                return;
            }
        }

        // Lone integer: concatenated clock digits or a rep count
        let digits = value_text.replace(' ', "");
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            let n: u32 = match digits.parse() {
                Ok(n) => n,
                Err(_) => return,
            };
            if n >= self.rules.reps_time_cutoff && is_concatenated_clock(&digits) {
                if let Ok(seconds) = parse_seconds(&digits) {
                    if seconds < 3600 {
                        let metadata = ScoreMetadata {
                            time_in_seconds: Some(seconds),
                            ..Default::default()
                        };
                        self.emit(ScoreKind::Time, value_text, metadata, explicit_round, capped_line);
                        return;
                    }
                }
            }
            let metadata = ScoreMetadata {
                total_reps: Some(n),
                ..Default::default()
            };
            self.emit(ScoreKind::Reps, value_text, metadata, explicit_round, capped_line);
            return;
        }

        log::debug!("unrecognized score line '{}' dropped", joined);
    }

    /// Consume the classifier; renames the sole time entry, when there
    /// is exactly one, to the finish time.
    pub fn finish(mut self) -> Vec<ScoreElement> {
        let time_entries: Vec<usize> = self
            .scores
            .iter()
            .enumerate()
            .filter(|(_, score)| score.kind == ScoreKind::Time)
            .map(|(i, _)| i)
            .collect();
        if let [only] = time_entries.as_slice() {
            self.scores[*only].name = ScoreName::FinishTime;
        }
        self.scores
    }

    fn emit(
        &mut self,
        kind: ScoreKind,
        value: String,
        metadata: ScoreMetadata,
        explicit_round: Option<u32>,
        capped_line: bool,
    ) {
        let name = self.name_for(kind, explicit_round, capped_line);
        log::debug!("score {:?} '{}' named {:?}", kind, value, name);
        self.scores.push(ScoreElement::new(name, kind, value, metadata));
    }

    /// Result-naming precedence for non-explicit names: set index, then
    /// reps-at-cap, then first-score slots, then positional rounds.
    fn name_for(&self, kind: ScoreKind, explicit_round: Option<u32>, capped_line: bool) -> ScoreName {
        if let Some(n) = explicit_round {
            return ScoreName::round(n);
        }
        if let Some(n) = self.set_index {
            return ScoreName::set(n);
        }
        if kind == ScoreKind::Weight {
            return ScoreName::Weight;
        }
        if kind == ScoreKind::Reps && (capped_line || self.time_cap.is_some()) {
            return ScoreName::TimeCap;
        }
        let index = self.scores.len() as u32;
        match (index, kind) {
            (0, ScoreKind::Time) => ScoreName::FinishTime,
            (0, ScoreKind::Reps) => ScoreName::Total,
            (0, _) => ScoreName::Other,
            (i, _) => ScoreName::round(i + 1),
        }
    }

    /// Stop at or after start is a plain delta. Slightly negative is
    /// clock jitter and clamps to zero; worse means the hour rolled
    /// over between the readings.
    fn start_stop_delta(&self, start: u32, stop: u32) -> u32 {
        if stop >= start {
            stop - start
        } else if start - stop <= self.rules.start_stop_tolerance {
            0
        } else {
            stop + 3600 - start
        }
    }

    fn is_section_header(fields: &GridRow, joined: &str) -> bool {
        fields.len() == 1 && joined.ends_with(':') && !joined.chars().any(|c| c.is_ascii_digit())
    }

    fn is_descriptive(joined: &str) -> bool {
        REST_WORD.is_match(joined) || joined.starts_with('@') || joined.starts_with('-')
    }
}
