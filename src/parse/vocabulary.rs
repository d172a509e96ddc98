//! Exercise vocabulary
//!
//! Whiteboards abbreviate aggressively ("du", "t2b", "c&j"). This
//! module provides the lookup table that maps those spellings to
//! canonical exercise names. The table is an injected dependency of the
//! movement classifier so tests and gyms with house vocabularies can
//! swap it out.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Alias lookup for exercise names.
pub trait ExerciseVocabulary {
    /// Canonical name for a raw spelling, if the vocabulary knows it.
    /// Input is matched case-insensitively with punctuation trimmed.
    fn lookup(&self, raw: &str) -> Option<&'static str>;

    /// All canonical names, for consumers that present pick-lists
    fn canonical_names(&self) -> Vec<&'static str>;
}

/// Alias table of common whiteboard spellings.
static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let entries: &[(&str, &[&str])] = &[
        ("Double Unders", &["du", "dus", "ndu", "double under", "double unders", "dbl unders"]),
        ("Single Unders", &["single under", "single unders", "singles"]),
        ("Bike", &["bike", "echo bike", "assault bike", "bike erg", "c2 bike"]),
        ("Row", &["row", "rower", "c2", "row erg", "erg"]),
        ("Ski", &["ski", "ski erg", "skierg"]),
        ("Run", &["run", "running"]),
        ("Burpees", &["burpee", "burpees"]),
        ("Wall Balls", &["wb", "wall ball", "wall balls", "wallballs"]),
        ("Box Jumps", &["bj", "box jump", "box jumps"]),
        ("Box Jump Overs", &["bjo", "box jump over", "box jump overs"]),
        ("Burpee Box Jump Overs", &["bbjo", "burpee box jump over", "burpee box jump overs"]),
        ("Pull Ups", &["pu", "pull up", "pull ups", "pullup", "pullups"]),
        ("Chest to Bar Pull Ups", &["c2b", "ctb", "chest to bar", "chest to bar pull ups"]),
        ("Bar Muscle Ups", &["bmu", "bar muscle up", "bar muscle ups"]),
        ("Ring Muscle Ups", &["rmu", "mu", "muscle up", "muscle ups", "ring muscle up", "ring muscle ups"]),
        ("Toes to Bar", &["t2b", "ttb", "toes to bar", "toes-to-bar"]),
        ("Knees to Elbows", &["k2e", "knees to elbows"]),
        ("Handstand Push Ups", &["hspu", "handstand push up", "handstand push ups", "strict hspu"]),
        ("Handstand Walk", &["hsw", "hs walk", "handstand walk"]),
        ("Push Ups", &["push up", "push ups", "pushup", "pushups"]),
        ("Sit Ups", &["sit up", "sit ups", "situps", "abmat sit ups"]),
        ("GHD Sit Ups", &["ghd", "ghd sit up", "ghd sit ups"]),
        ("V Ups", &["v up", "v ups", "v-ups"]),
        ("Air Squats", &["air squat", "air squats", "squat", "squats"]),
        ("Front Squats", &["fs", "front squat", "front squats"]),
        ("Back Squats", &["bs", "back squat", "back squats"]),
        ("Overhead Squats", &["ohs", "overhead squat", "overhead squats"]),
        ("Pistols", &["pistol", "pistols", "pistol squats"]),
        ("Lunges", &["lunge", "lunges", "walking lunges", "walking lunge"]),
        ("Step Ups", &["step up", "step ups", "box step ups"]),
        ("Deadlifts", &["dl", "deadlift", "deadlifts"]),
        ("Sumo Deadlift High Pulls", &["sdhp", "sumo deadlift high pull", "sumo deadlift high pulls"]),
        ("Thrusters", &["thruster", "thrusters"]),
        ("Cleans", &["clean", "cleans", "squat clean", "squat cleans"]),
        ("Power Cleans", &["pc", "power clean", "power cleans"]),
        ("Hang Power Cleans", &["hpc", "hang power clean", "hang power cleans"]),
        ("Clean and Jerks", &["c&j", "cj", "clean and jerk", "clean & jerk", "clean and jerks"]),
        ("Snatches", &["snatch", "snatches", "squat snatch"]),
        ("Power Snatches", &["ps", "power snatch", "power snatches"]),
        ("Shoulder Press", &["sp", "strict press", "shoulder press", "press"]),
        ("Push Press", &["pp", "push press"]),
        ("Push Jerks", &["pj", "push jerk", "push jerks"]),
        ("Shoulder to Overhead", &["s2o", "sto", "shoulder to overhead"]),
        ("Kettlebell Swings", &["kbs", "kb swing", "kb swings", "kettlebell swing", "kettlebell swings"]),
        ("Dumbbell Snatches", &["db snatch", "db snatches", "dumbbell snatch", "dumbbell snatches"]),
        ("Devil Press", &["devil press", "devils press"]),
        ("Man Makers", &["man maker", "man makers"]),
        ("Rope Climbs", &["rc", "rope climb", "rope climbs"]),
        ("Farmers Carry", &["farmers carry", "farmer carry", "farmer's carry"]),
        ("Sled Push", &["sled push", "sled"]),
        ("Mountain Climbers", &["mountain climber", "mountain climbers"]),
        ("Plank", &["plank", "plank hold"]),
        ("Russian Twists", &["russian twist", "russian twists"]),
        ("Goblet Squats", &["goblet squat", "goblet squats"]),
        ("Bench Press", &["bench", "bench press"]),
        ("Hip Thrusts", &["hip thrust", "hip thrusts"]),
        ("Calorie Row", &["cal row"]),
        ("Calorie Bike", &["cal bike"]),
    ];

    let mut table = HashMap::new();
    for (canonical, spellings) in entries {
        for spelling in *spellings {
            table.insert(*spelling, *canonical);
        }
    }
    table
});

/// The built-in vocabulary of common whiteboard spellings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardVocabulary;

impl ExerciseVocabulary for StandardVocabulary {
    fn lookup(&self, raw: &str) -> Option<&'static str> {
        ALIASES.get(clean_exercise_text(raw).as_str()).copied()
    }

    fn canonical_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = ALIASES.values().copied().collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// Lowercase, trim surrounding punctuation artifacts, and collapse
/// internal whitespace.
pub fn clean_exercise_text(raw: &str) -> String {
    let trimmed = raw
        .trim()
        .trim_matches(|c: char| matches!(c, ':' | '.' | ',' | ';' | '-' | '*'))
        .trim();
    trimmed
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title-case each word ("kb swings" becomes "Kb Swings"). Fallback for
/// names the vocabulary does not know, in loose-validation contexts.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a raw exercise spelling.
///
/// `strict` rejects unknown names (the movement is dropped); loose mode
/// title-cases them instead.
pub fn normalize_exercise(
    vocabulary: &dyn ExerciseVocabulary,
    raw: &str,
    strict: bool,
) -> Option<String> {
    if let Some(canonical) = vocabulary.lookup(raw) {
        return Some(canonical.to_string());
    }
    if strict {
        return None;
    }
    let cleaned = clean_exercise_text(raw);
    if cleaned.is_empty() {
        None
    } else {
        Some(title_case(&cleaned))
    }
}
