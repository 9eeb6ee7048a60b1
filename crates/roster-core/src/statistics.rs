//! Aggregate statistics over the current records.
//!
//! Rounding is half away from zero (`f64::round`): the mean is kept to two
//! decimals and the pass percentage to a whole number.

use serde::{Deserialize, Serialize};

use crate::classifier::Classifier;
use crate::error::{EmptyAction, Result, RosterError};
use crate::model::{Band, Record};

/// Summary statistics for a non-empty roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of records.
    pub total: usize,
    /// Sum of all scores.
    pub sum: u64,
    /// Mean score, rounded to two decimals.
    pub average: f64,
    /// Highest score.
    pub highest: u8,
    /// Lowest score.
    pub lowest: u8,
    /// Pass threshold the passing figures were computed with.
    pub pass_threshold: u8,
    /// Records at or above the pass threshold.
    pub passing: usize,
    /// Share of passing records, rounded to a whole percent.
    pub pass_percentage: u32,
    /// Counts per band.
    pub distribution: BandCounts,
}

/// Number of records in each band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCounts {
    pub excellent: usize,
    pub good: usize,
    pub needs_improvement: usize,
}

impl BandCounts {
    pub fn get(&self, band: Band) -> usize {
        match band {
            Band::Excellent => self.excellent,
            Band::Good => self.good,
            Band::NeedsImprovement => self.needs_improvement,
        }
    }

    fn bump(&mut self, band: Band) {
        match band {
            Band::Excellent => self.excellent += 1,
            Band::Good => self.good += 1,
            Band::NeedsImprovement => self.needs_improvement += 1,
        }
    }
}

/// Round to two decimal places, half away from zero.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute statistics from `records`.
///
/// Fails with [`RosterError::EmptyStore`] when there is nothing to summarize.
pub fn compute_statistics(records: &[Record], classifier: &Classifier) -> Result<Statistics> {
    let (Some(highest), Some(lowest)) = (
        records.iter().map(Record::score).max(),
        records.iter().map(Record::score).min(),
    ) else {
        return Err(RosterError::EmptyStore(EmptyAction::Statistics));
    };

    let total = records.len();
    let sum: u64 = records.iter().map(|r| u64::from(r.score())).sum();
    let average = round_to_hundredths(sum as f64 / total as f64);

    let passing = records
        .iter()
        .filter(|r| classifier.passes(r.score()))
        .count();
    let pass_percentage = (passing as f64 / total as f64 * 100.0).round() as u32;

    let mut distribution = BandCounts::default();
    for record in records {
        distribution.bump(record.band());
    }

    Ok(Statistics {
        total,
        sum,
        average,
        highest,
        lowest,
        pass_threshold: classifier.pass_threshold(),
        passing,
        pass_percentage,
        distribution,
    })
}
