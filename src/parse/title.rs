//! Title selection and metadata mining
//!
//! The title line carries more than a name: time caps ("20 min cap"),
//! interval periods ("E2MOM", "10 min EMOM"), and multi-set structure
//! ("3 sets, 4 rounds") all live there and steer the later passes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::parse::time::parse_clock;

lazy_static! {
    static ref TIME_CAP_MINUTES: Regex = Regex::new(r"(?i)\b(\d+)\s*min(?:ute)?s?\s*cap\b").unwrap();
    static ref TIME_CAP_CLOCK: Regex = Regex::new(r"(?i)\b(\d{1,2}:\d{2})\s*cap\b").unwrap();
    static ref INTERVAL_CODE: Regex = Regex::new(r"(?i)^e(\d*)mom\b").unwrap();
    static ref MINUTE_EMOM: Regex = Regex::new(r"(?i)\b(\d+)\s*min(?:ute)?s?\s+emom\b").unwrap();
    static ref EMOM_WORD: Regex = Regex::new(r"(?i)\bemom\b").unwrap();
    static ref SETS_ROUNDS: Regex = Regex::new(r"(?i)\b(\d+)\s*sets?\s*,?\s*(\d+)\s*rounds?\b").unwrap();
    static ref BARE_INTERVAL_CODE: Regex = Regex::new(r"(?i)^e\d*mom$").unwrap();
}

/// Multi-set structure announced in the title ("3 sets, 4 rounds")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetStructure {
    pub sets: u32,
    pub rounds: u32,
}

/// Title line plus everything mined out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleInfo {
    /// Cleaned title text
    pub title: String,

    /// Time cap in seconds, when announced
    pub time_cap_seconds: Option<u32>,

    /// Interval period in minutes for EMOM-style workouts
    pub interval_period_minutes: Option<u32>,

    /// Multi-set structure, when announced
    pub set_structure: Option<SetStructure>,

    /// Bare code/keyword title that the description stage should
    /// improve. Never set for AI-refined titles.
    pub needs_improvement: bool,
}

impl TitleInfo {
    /// Fallback used when no title line exists at all
    pub fn fallback() -> TitleInfo {
        TitleInfo {
            title: "Workout".to_string(),
            time_cap_seconds: None,
            interval_period_minutes: None,
            set_structure: None,
            needs_improvement: false,
        }
    }
}

/// Clean stray delimiter and whitespace artifacts out of a candidate
/// title, including the one known encoding substitution.
pub fn clean_title(raw: &str) -> String {
    raw.replace("â€™", "'")
        .replace('|', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Archetype keywords that make a title "bare" when they are all it says
const BARE_KEYWORDS: &[&str] = &[
    "amrap",
    "emom",
    "chipper",
    "for time",
    "rounds for time",
    "for reps",
    "metcon",
    "wod",
];

/// Parse a selected title line into [`TitleInfo`].
///
/// `from_ai` marks AI-refined titles, which are considered final and
/// never flagged for improvement.
pub fn parse_title(raw: &str, from_ai: bool) -> TitleInfo {
    let title = clean_title(raw);
    let lower = title.to_lowercase();

    let time_cap_seconds = TIME_CAP_MINUTES
        .captures(&lower)
        .and_then(|caps| caps[1].parse::<u32>().ok().map(|n| n * 60))
        .or_else(|| {
            TIME_CAP_CLOCK
                .captures(&lower)
                .and_then(|caps| parse_clock(&caps[1]))
        });

    let interval_period_minutes = INTERVAL_CODE
        .captures(&lower)
        .map(|caps| caps[1].parse::<u32>().unwrap_or(1).max(1))
        .or_else(|| {
            MINUTE_EMOM
                .captures(&lower)
                .and_then(|caps| caps[1].parse::<u32>().ok())
        })
        .or_else(|| EMOM_WORD.is_match(&lower).then_some(1));

    let set_structure = SETS_ROUNDS.captures(&lower).and_then(|caps| {
        let sets = caps[1].parse::<u32>().ok()?;
        let rounds = caps[2].parse::<u32>().ok()?;
        Some(SetStructure { sets, rounds })
    });

    let bare = BARE_INTERVAL_CODE.is_match(&lower) || BARE_KEYWORDS.contains(&lower.as_str());
    let needs_improvement = bare && !from_ai;

    log::debug!(
        "title '{}': cap={:?} period={:?} sets={:?} improve={}",
        title,
        time_cap_seconds,
        interval_period_minutes,
        set_structure,
        needs_improvement
    );

    TitleInfo {
        title,
        time_cap_seconds,
        interval_period_minutes,
        set_structure,
        needs_improvement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_title_strips_pipes_and_mojibake() {
        assert_eq!(clean_title("AMRAP |  | 10 min"), "AMRAP 10 min");
        assert_eq!(clean_title("Gracieâ€™s Day"), "Gracie's Day");
    }

    #[test]
    fn test_minute_cap() {
        let info = parse_title("Chipper 20 min cap", false);
        assert_eq!(info.time_cap_seconds, Some(1200));
    }

    #[test]
    fn test_clock_cap() {
        let info = parse_title("For Time 12:30 cap", false);
        assert_eq!(info.time_cap_seconds, Some(750));
    }

    #[test]
    fn test_interval_code_with_period() {
        let info = parse_title("E2MOM 16", false);
        assert_eq!(info.interval_period_minutes, Some(2));
    }

    #[test]
    fn test_bare_emom_defaults_to_one_minute() {
        let info = parse_title("EMOM", false);
        assert_eq!(info.interval_period_minutes, Some(1));
        assert!(info.needs_improvement, "bare EMOM title should be flagged");
    }

    #[test]
    fn test_minute_emom_phrasing() {
        let info = parse_title("12 min EMOM", false);
        assert_eq!(info.interval_period_minutes, Some(12));
        assert!(!info.needs_improvement);
    }

    #[test]
    fn test_set_structure() {
        let info = parse_title("Strength 3 sets, 4 rounds", false);
        assert_eq!(info.set_structure, Some(SetStructure { sets: 3, rounds: 4 }));
    }

    #[test]
    fn test_ai_title_never_flagged() {
        let info = parse_title("AMRAP", true);
        assert!(!info.needs_improvement);
    }

    #[test]
    fn test_bare_interval_code_flagged() {
        let info = parse_title("E3MOM", false);
        assert!(info.needs_improvement);
        assert_eq!(info.interval_period_minutes, Some(3));
    }
}
