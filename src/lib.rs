//! Whiteboard workout extraction
//!
//! This crate converts noisy, line-oriented text transcribed from a
//! handwritten workout whiteboard into a structured, typed
//! [`WorkoutExtraction`]: a title, ordered workout elements, recorded
//! scores, and a confidence estimate. Classification is deterministic
//! and never fails outright; malformed input degrades to a best-effort
//! result.

pub mod analysis;
pub mod api;
pub mod models;
pub mod parse;

// Re-export commonly used types
pub use api::{extract_workout, extract_workout_from_text, ExtractorConfig, WorkoutExtractor};
pub use models::elements::*;
pub use models::extraction::*;
pub use models::scores::*;
