//! Models module for the whiteboard workout extractor
//!
//! This module contains all the data models and structures
//! used to represent a parsed whiteboard workout.

pub mod elements;
pub mod extraction;
pub mod scores;

// Re-export commonly used types
pub use elements::*;
pub use extraction::*;
pub use scores::*;
