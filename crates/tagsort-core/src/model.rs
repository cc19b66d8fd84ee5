//! Core data model types for tagsort.
//!
//! These are the fundamental types the entire tagsort system uses to
//! represent draggable tags and the two zones they can occupy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single draggable chip: its label, whether it belongs in the answer
/// zone, and the feedback text shown after checking.
///
/// Immutable once loaded from the catalog; labels are unique within an
/// exercise instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// The visible label, unique within an answer set.
    pub label: String,
    /// Whether this tag is a correct answer.
    pub correct: bool,
    /// Feedback text shown to the learner after evaluation.
    #[serde(default)]
    pub feedback: String,
}

impl Tag {
    pub fn new(label: impl Into<String>, correct: bool, feedback: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            correct,
            feedback: feedback.into(),
        }
    }
}

/// The two places a tag can live. A tag is in exactly one zone at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// The source pool of tags not yet committed as an answer.
    Bank,
    /// The target area holding the learner's chosen tags.
    Answer,
}

impl Zone {
    /// The zone a toggled tag moves to.
    pub fn opposite(self) -> Zone {
        match self {
            Zone::Bank => Zone::Answer,
            Zone::Answer => Zone::Bank,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Bank => write!(f, "bank"),
            Zone::Answer => write!(f, "answer"),
        }
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bank" | "pool" => Ok(Zone::Bank),
            "answer" | "answers" => Ok(Zone::Answer),
            other => Err(format!("unknown zone: {other}")),
        }
    }
}
