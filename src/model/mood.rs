//! The fixed mood scale and its calendar colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the day felt, ordered from worst to best.
///
/// The derived `Ord` follows declaration order, so `Mood::Terrible < Mood::Great`.
///
/// # Examples
///
/// ```
/// use moodcal::model::Mood;
///
/// let mood: Mood = "okay".parse().unwrap();
/// assert_eq!(mood, Mood::Okay);
/// assert_eq!(mood.color(), "#2196F3");
/// assert!(Mood::Bad < Mood::Good);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mood {
    Terrible,
    Bad,
    Okay,
    Good,
    Great,
}

/// Error returned when a label names no mood.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown mood '{label}' (expected one of: terrible, bad, okay, good, great)")]
pub struct ParseMoodError {
    /// The label that failed to parse
    pub label: String,
}

impl Mood {
    /// Every mood, worst first. This is also the order of the mood picker.
    pub const ALL: [Mood; 5] = [
        Mood::Terrible,
        Mood::Bad,
        Mood::Okay,
        Mood::Good,
        Mood::Great,
    ];

    /// Display label, as stored on disk.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Terrible => "Terrible",
            Mood::Bad => "Bad",
            Mood::Okay => "Okay",
            Mood::Good => "Good",
            Mood::Great => "Great",
        }
    }

    /// Background color of a calendar day carrying this mood.
    pub fn color(self) -> &'static str {
        match self {
            Mood::Terrible => "#F44336",
            Mood::Bad => "#E57373",
            Mood::Okay => "#2196F3",
            Mood::Good => "#81C784",
            Mood::Great => "#4CAF50",
        }
    }

    /// Position on the scale, 1 (terrible) to 5 (great).
    pub fn score(self) -> u8 {
        match self {
            Mood::Terrible => 1,
            Mood::Bad => 2,
            Mood::Okay => 3,
            Mood::Good => 4,
            Mood::Great => 5,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseMoodError {
                label: s.to_string(),
            })
    }
}
