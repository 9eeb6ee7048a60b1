//! The ordered, in-memory record store.
//!
//! Insertion order is significant: it is the display order and the basis of
//! positional removal. Positions are always resolved against the current
//! sequence.

use tracing::debug;

use crate::classifier::Classifier;
use crate::error::{Result, RosterError};
use crate::model::{Record, MAX_SCORE, MIN_SCORE, SAMPLE_RECORDS};

/// Ordered record store with a count mirror.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<Record>,
    count: usize,
    seeded: bool,
}

impl Roster {
    /// An empty roster that still allows seeding.
    pub fn new() -> Self {
        Self::default()
    }

    /// A roster holding the sample records.
    pub fn with_samples(classifier: &Classifier) -> Self {
        let mut roster = Self::new();
        roster.seed(classifier);
        roster
    }

    /// Replace the contents with the sample records.
    ///
    /// Returns `false` without touching the roster when it has already been
    /// seeded and not cleared since.
    pub fn seed(&mut self, classifier: &Classifier) -> bool {
        if self.seeded {
            return false;
        }
        self.records = SAMPLE_RECORDS
            .iter()
            .map(|&(name, score)| Record::new(name, score, classifier))
            .collect();
        self.count = self.records.len();
        self.seeded = true;
        debug!(count = self.count, "seeded roster");
        true
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The maintained record count. Always equal to [`Roster::len`].
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Whether a record with this name exists, ignoring case.
    pub fn contains_name(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.has_name(name))
    }

    /// Validate and append a record.
    ///
    /// Checks run in order and the first failure wins: name, score, then
    /// duplicate name. Nothing is changed on failure.
    pub fn add(
        &mut self,
        name: &str,
        score_text: &str,
        classifier: &Classifier,
    ) -> Result<&Record> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        let score = parse_score(score_text)?;
        if self.contains_name(name) {
            return Err(RosterError::DuplicateName {
                name: name.to_string(),
            });
        }

        self.records.push(Record::new(name, score, classifier));
        self.count += 1;
        debug_assert_eq!(self.count, self.records.len());
        debug!(name, score, count = self.count, "added record");

        let last = self.records.len() - 1;
        Ok(&self.records[last])
    }

    /// Remove the record at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: i64) -> Option<Record> {
        let position = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.records.len())?;
        let removed = self.records.remove(position);
        self.count -= 1;
        debug_assert_eq!(self.count, self.records.len());
        debug!(name = removed.name(), position, "removed record");
        Some(removed)
    }

    /// Drop every record and allow seeding again. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        self.count = 0;
        self.seeded = false;
        debug!(removed, "cleared roster");
        removed
    }

    /// Records whose score lies in `min..=max`, in store order.
    pub fn find_by_range(&self, min: i64, max: i64) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| (min..=max).contains(&i64::from(r.score())))
            .collect()
    }
}

/// Parse score input from its leading integer.
///
/// Leading whitespace, an optional sign and at least one digit are required;
/// anything after the digits is ignored, so `"7.5"` reads as 7 and `"1e2"`
/// as 1. The value must then lie in `[MIN_SCORE, MAX_SCORE]`.
pub fn parse_score(text: &str) -> Result<u8> {
    let invalid = || RosterError::InvalidScore {
        input: text.to_string(),
    };
    let trimmed = text.trim_start();
    let unsigned = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);
    let digits = unsigned.len()
        - unsigned
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .len();
    if digits == 0 {
        return Err(invalid());
    }
    let end = trimmed.len() - unsigned.len() + digits;
    let value: i64 = trimmed[..end].parse().map_err(|_| invalid())?;
    if !(i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(&value) {
        return Err(invalid());
    }
    u8::try_from(value).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.name()).collect()
    }

    fn sampled() -> Roster {
        Roster::with_samples(&Classifier::default())
    }

    #[test]
    fn samples_in_order() {
        let roster = sampled();
        assert_eq!(
            names(roster.records()),
            vec!["Alice Johnson", "Bob Smith", "Carol Davis", "David Wilson"]
        );
        assert_eq!(roster.count(), 4);
        assert!(roster.is_seeded());
    }

    #[test]
    fn seed_is_noop_until_cleared() {
        let classifier = Classifier::default();
        let mut roster = sampled();
        roster.remove(0);
        assert!(!roster.seed(&classifier));
        assert_eq!(roster.len(), 3);

        roster.clear();
        assert!(roster.seed(&classifier));
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn add_appends_trimmed_name() {
        let mut roster = Roster::new();
        let record = roster
            .add("  Eve Adams ", " 88 ", &Classifier::default())
            .unwrap();
        assert_eq!(record.name(), "Eve Adams");
        assert_eq!(record.score(), 88);
        assert_eq!(roster.count(), 1);
    }

    #[test]
    fn add_rejects_empty_name_first() {
        let mut roster = Roster::new();
        let err = roster
            .add("   ", "not a number", &Classifier::default())
            .unwrap_err();
        assert_eq!(err, RosterError::EmptyName);
        assert!(roster.is_empty());
    }

    #[test]
    fn add_rejects_invalid_scores() {
        let mut roster = sampled();
        for input in ["", "  ", "abc", "-", "+", "x12", "-1", "101", "150.5"] {
            let err = roster
                .add("Zed", input, &Classifier::default())
                .unwrap_err();
            assert!(
                matches!(err, RosterError::InvalidScore { .. }),
                "input {input:?} gave {err:?}"
            );
        }
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn add_rejects_duplicate_regardless_of_case() {
        let classifier = Classifier::default();
        let mut roster = Roster::new();
        roster.add("Alice", "90", &classifier).unwrap();
        for name in ["alice", "ALICE", " aLiCe "] {
            let err = roster.add(name, "50", &classifier).unwrap_err();
            assert!(matches!(err, RosterError::DuplicateName { .. }));
        }
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn add_reads_leading_integer() {
        let classifier = Classifier::default();
        let mut roster = Roster::new();
        for (name, input, score) in [
            ("A", "7.5", 7),
            ("B", "1e2", 1),
            ("C", "88.0", 88),
            ("D", "78abc", 78),
            ("E", "+42", 42),
            ("F", "-0", 0),
            ("G", " 100 points", 100),
        ] {
            let record = roster.add(name, input, &classifier).unwrap();
            assert_eq!(record.score(), score, "input {input:?}");
        }
        assert_eq!(roster.count(), 7);
    }

    #[test]
    fn invalid_score_checked_before_duplicate() {
        let mut roster = sampled();
        let err = roster
            .add("alice johnson", "200", &Classifier::default())
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidScore { .. }));
    }

    #[test]
    fn score_bounds_are_inclusive() {
        assert_eq!(parse_score("0").unwrap(), 0);
        assert_eq!(parse_score("100").unwrap(), 100);
        assert!(parse_score("99999999999999999999").is_err());
    }

    #[test]
    fn add_then_remove_restores_sequence() {
        let mut roster = sampled();
        let before = roster.records().to_vec();
        roster.add("Eve", "70", &Classifier::default()).unwrap();
        let removed = roster.remove(4).unwrap();
        assert_eq!(removed.name(), "Eve");
        assert_eq!(roster.records(), before.as_slice());
    }

    #[test]
    fn remove_uses_current_positions() {
        let mut roster = sampled();
        roster.remove(1);
        let removed = roster.remove(1).unwrap();
        assert_eq!(removed.name(), "Carol Davis");
        assert_eq!(names(roster.records()), vec!["Alice Johnson", "David Wilson"]);
    }

    #[test]
    fn remove_out_of_range_is_ignored() {
        let mut roster = sampled();
        assert!(roster.remove(-1).is_none());
        assert!(roster.remove(4).is_none());
        assert!(roster.remove(i64::MAX).is_none());
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.count(), 4);
    }

    #[test]
    fn count_tracks_length() {
        let classifier = Classifier::default();
        let mut roster = sampled();
        roster.add("Eve", "70", &classifier).unwrap();
        roster.add("eve", "70", &classifier).unwrap_err();
        roster.remove(0);
        roster.remove(10);
        assert_eq!(roster.count(), roster.len());
        roster.clear();
        assert_eq!(roster.count(), 0);
        roster.add("Frank", "12", &classifier).unwrap();
        assert_eq!(roster.count(), roster.len());
    }

    #[test]
    fn range_query_keeps_store_order() {
        let roster = sampled();
        let found = roster.find_by_range(60, 89);
        let found: Vec<(&str, u8)> = found.iter().map(|r| (r.name(), r.score())).collect();
        assert_eq!(found, vec![("Bob Smith", 78), ("Carol Davis", 65)]);
    }

    #[test]
    fn range_query_edges() {
        let roster = sampled();
        assert_eq!(roster.find_by_range(92, 92).len(), 1);
        assert_eq!(roster.find_by_range(0, 100).len(), 4);
        assert!(roster.find_by_range(80, 60).is_empty());
        assert!(Roster::new().find_by_range(0, 100).is_empty());
    }
}
