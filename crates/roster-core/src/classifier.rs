//! Score classification.
//!
//! Maps a score to a [`Band`] and a fixed message. Two messages share the
//! `Good` band; they are kept distinct.

use serde::Serialize;

use crate::model::{Band, DEFAULT_PASS_THRESHOLD, MAX_SCORE, MIN_SCORE};

/// Lowest score in the `Excellent` band.
pub const EXCELLENT_MIN: u8 = 90;
/// Lowest score that earns the stronger `Good` message.
pub const GREAT_MIN: u8 = 80;

pub const EXCELLENT_MESSAGE: &str = "Outstanding work! 🌟";
pub const GREAT_MESSAGE: &str = "Great job! 👍";
pub const GOOD_MESSAGE: &str = "Good work! ✓";
pub const NEEDS_IMPROVEMENT_MESSAGE: &str = "Needs improvement 📚";

/// Result of classifying a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grade {
    pub band: Band,
    pub message: &'static str,
}

/// Threshold-based classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    pass_threshold: u8,
}

impl Classifier {
    pub fn new(pass_threshold: u8) -> Self {
        Self { pass_threshold }
    }

    pub fn pass_threshold(&self) -> u8 {
        self.pass_threshold
    }

    /// Classify a score. Total over `u8`; range checks belong to the caller.
    pub fn classify(&self, score: u8) -> Grade {
        let (band, message) = if score >= EXCELLENT_MIN {
            (Band::Excellent, EXCELLENT_MESSAGE)
        } else if score >= GREAT_MIN {
            (Band::Good, GREAT_MESSAGE)
        } else if score >= self.pass_threshold {
            (Band::Good, GOOD_MESSAGE)
        } else {
            (Band::NeedsImprovement, NEEDS_IMPROVEMENT_MESSAGE)
        };
        Grade { band, message }
    }

    /// Whether `score` counts as passing.
    pub fn passes(&self, score: u8) -> bool {
        score >= self.pass_threshold
    }

    /// Inclusive score range covered by `band`, or `None` if no score maps to it.
    pub fn range(&self, band: Band) -> Option<(u8, u8)> {
        let good_min = self.pass_threshold.min(GREAT_MIN);
        match band {
            Band::Excellent => Some((EXCELLENT_MIN, MAX_SCORE)),
            Band::Good => Some((good_min, EXCELLENT_MIN - 1)),
            Band::NeedsImprovement => good_min.checked_sub(1).map(|max| (MIN_SCORE, max)),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_PASS_THRESHOLD)
    }
}

/// Classify with the default pass threshold.
pub fn classify(score: u8) -> Grade {
    Classifier::default().classify(score)
}
