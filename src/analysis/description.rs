//! Description generation
//!
//! Fills a small mustache template keyed by the detected archetype with
//! the top movement names. Also upgrades bare code/keyword titles
//! ("EMOM") once the body is known.

use serde::Serialize;

use crate::models::{WorkoutElement, WorkoutType};

/// Movement names used in a description, at most
const MAX_NAMED_MOVEMENTS: usize = 3;

/// Context data for template rendering
#[derive(Debug, Clone, Serialize)]
struct DescriptionContext {
    /// Human-readable archetype name
    workout_type: String,

    /// Joined movement names ("Thrusters, Pull Ups and Burpees")
    movement_list: String,
}

/// Get template content by archetype
fn template_content(workout_type: WorkoutType) -> &'static str {
    match workout_type {
        WorkoutType::Amrap => include_str!("templates/amrap.mustache"),
        WorkoutType::Emom => include_str!("templates/emom.mustache"),
        WorkoutType::Chipper => include_str!("templates/chipper.mustache"),
        WorkoutType::RoundsForTime => include_str!("templates/rounds_for_time.mustache"),
        WorkoutType::ForTime => include_str!("templates/for_time.mustache"),
        WorkoutType::ForReps => include_str!("templates/for_reps.mustache"),
        WorkoutType::Lift => include_str!("templates/lift.mustache"),
        WorkoutType::General => include_str!("templates/general.mustache"),
    }
}

/// Join up to [`MAX_NAMED_MOVEMENTS`] names into prose
fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

/// Generate the one-line description for a parsed workout.
///
/// Falls back to "A {type} workout." when there are no movements or
/// template rendering fails.
pub fn generate_description(workout_type: WorkoutType, elements: &[WorkoutElement]) -> String {
    let names: Vec<&str> = elements
        .iter()
        .filter_map(|element| element.as_movement())
        .map(|movement| movement.exercise.as_str())
        .take(MAX_NAMED_MOVEMENTS)
        .collect();

    let context = DescriptionContext {
        workout_type: workout_type.to_string(),
        movement_list: join_names(&names),
    };

    let template = if names.is_empty() {
        include_str!("templates/fallback.mustache")
    } else {
        template_content(workout_type)
    };

    mustache::compile_str(template)
        .and_then(|compiled| compiled.render_to_string(&context))
        .map(|rendered| rendered.trim().to_string())
        .unwrap_or_else(|error| {
            log::debug!("description template failed: {}", error);
            format!("A {} workout.", workout_type)
        })
}

/// Upgrade a bare code/keyword title using the parsed body: "EMOM"
/// becomes "EMOM: Double Unders". Titles stay untouched when no
/// movement is available to name.
pub fn improve_title(title: &str, elements: &[WorkoutElement]) -> String {
    match elements.iter().find_map(|element| element.as_movement()) {
        Some(movement) => format!("{}: {}", title, movement.exercise),
        None => title.to_string(),
    }
}
