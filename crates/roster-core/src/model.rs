//! Core data model types for roster.
//!
//! A [`Record`] is a named score together with its classification. Records are
//! only built through a [`Classifier`], so the band and message always follow
//! from the score.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classifier::{Classifier, Grade};

/// Lowest accepted score.
pub const MIN_SCORE: u8 = 0;
/// Highest accepted score.
pub const MAX_SCORE: u8 = 100;
/// Minimum score counted as passing unless configured otherwise.
pub const DEFAULT_PASS_THRESHOLD: u8 = 60;

/// Names and scores loaded into a fresh roster.
pub const SAMPLE_RECORDS: [(&str, u8); 4] = [
    ("Alice Johnson", 92),
    ("Bob Smith", 78),
    ("Carol Davis", 65),
    ("David Wilson", 45),
];

/// Classification band derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Band {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Band {
    /// All bands, best first.
    pub const ALL: [Band; 3] = [Band::Excellent, Band::Good, Band::NeedsImprovement];

    /// Machine-readable identifier, also used as a CSS class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Excellent => "excellent",
            Band::Good => "good",
            Band::NeedsImprovement => "needs-improvement",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Band::Excellent => "Excellent",
            Band::Good => "Good",
            Band::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single named score and its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: String,
    score: u8,
    band: Band,
    message: &'static str,
}

impl Record {
    /// Build a record, classifying `score` with `classifier`.
    ///
    /// Callers validate the name and the score range beforehand.
    pub fn new(name: impl Into<String>, score: u8, classifier: &Classifier) -> Self {
        let Grade { band, message } = classifier.classify(score);
        Self {
            name: name.into(),
            score,
            band,
            message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn band(&self) -> Band {
        self.band
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Case-insensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
