//! Clock value parsing
//!
//! Whiteboard times are written with or without separators: "1:13" and
//! "113" both mean one minute thirteen seconds, while "45" is plain
//! seconds. The rules here must be exact; the score classifier leans on
//! them to tell times from rep counts.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Bare clock: M:SS or MM:SS
    static ref CLOCK: Regex = Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap();
}

/// Failures of strict clock parsing. Internal only; callers fall back
/// to a reps/weight reading instead of surfacing these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("not a clock value: {0}")]
    NotAClock(String),

    #[error("seconds component out of range in {0}")]
    SecondsOutOfRange(String),

    #[error("value too large to be a time: {0}")]
    TooLarge(u32),
}

/// Parse a clock value into seconds.
///
/// A value containing `:` is always minutes:seconds ("1:13" is 73,
/// never 113). A value without `:` under 60 is raw seconds; at 60 or
/// above the trailing two digits are read as seconds and the rest as
/// minutes ("113" is 1:13, 73). When that split yields an invalid
/// seconds component ("175"), the whole value is re-read as raw
/// seconds if it stays under an hour.
pub fn parse_seconds(value: &str) -> Result<u32, TimeParseError> {
    let value = value.trim();

    if let Some(caps) = CLOCK.captures(value) {
        let minutes: u32 = caps[1].parse().map_err(|_| TimeParseError::NotAClock(value.to_string()))?;
        let seconds: u32 = caps[2].parse().map_err(|_| TimeParseError::NotAClock(value.to_string()))?;
        if seconds >= 60 {
            return Err(TimeParseError::SecondsOutOfRange(value.to_string()));
        }
        return Ok(minutes * 60 + seconds);
    }

    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        let n: u32 = value.parse().map_err(|_| TimeParseError::NotAClock(value.to_string()))?;
        if n < 60 {
            return Ok(n);
        }
        let minutes = n / 100;
        let seconds = n % 100;
        if seconds < 60 {
            return Ok(minutes * 60 + seconds);
        }
        // Trailing pair is not a valid seconds value; fall back to raw seconds
        if n < 3600 {
            return Ok(n);
        }
        return Err(TimeParseError::TooLarge(n));
    }

    Err(TimeParseError::NotAClock(value.to_string()))
}

/// Format seconds as M:SS. Inverse of [`parse_seconds`] for all values
/// under an hour.
pub fn format_time(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Whether `value` is a bare M:SS / MM:SS clock with a valid seconds
/// component.
pub fn is_clock(value: &str) -> bool {
    CLOCK
        .captures(value.trim())
        .map(|caps| caps[2].parse::<u32>().map(|s| s < 60).unwrap_or(false))
        .unwrap_or(false)
}

/// Parse a bare M:SS clock only; colon-free digit runs are rejected.
pub fn parse_clock(value: &str) -> Option<u32> {
    if is_clock(value) {
        parse_seconds(value).ok()
    } else {
        None
    }
}

/// Whether a colon-free digit run reads as a valid concatenated MMSS
/// time at or over the reps/time cutoff ("113" yes, "175" no, "45" no).
pub fn is_concatenated_clock(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match value.parse::<u32>() {
        Ok(n) => n >= 60 && n % 100 < 60 && n / 100 < 60,
        Err(_) => false,
    }
}
