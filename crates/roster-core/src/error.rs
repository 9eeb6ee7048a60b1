//! Roster error types.
//!
//! Every variant is a local, user-facing rejection: the operation that
//! produced it made no change to the roster.

use std::fmt;

use thiserror::Error;

use crate::model::{MAX_SCORE, MIN_SCORE};

/// Errors returned by roster operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The name was empty after trimming.
    #[error("Please enter a student name!")]
    EmptyName,

    /// The score was not an integer or fell outside the score bounds.
    #[error("Please enter a valid grade between {} and {}!", MIN_SCORE, MAX_SCORE)]
    InvalidScore { input: String },

    /// A record with the same name (ignoring case) already exists.
    #[error("A student with this name already exists!")]
    DuplicateName { name: String },

    /// The operation needs at least one record.
    #[error("No students to {0}!")]
    EmptyStore(EmptyAction),
}

/// The operation that was refused on an empty roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyAction {
    Clear,
    Statistics,
}

impl fmt::Display for EmptyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyAction::Clear => write!(f, "clear"),
            EmptyAction::Statistics => write!(f, "calculate statistics for"),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_notices() {
        assert_eq!(
            RosterError::EmptyName.to_string(),
            "Please enter a student name!"
        );
        assert_eq!(
            RosterError::InvalidScore { input: "abc".into() }.to_string(),
            "Please enter a valid grade between 0 and 100!"
        );
        assert_eq!(
            RosterError::DuplicateName { name: "alice".into() }.to_string(),
            "A student with this name already exists!"
        );
        assert_eq!(
            RosterError::EmptyStore(EmptyAction::Clear).to_string(),
            "No students to clear!"
        );
        assert_eq!(
            RosterError::EmptyStore(EmptyAction::Statistics).to_string(),
            "No students to calculate statistics for!"
        );
    }
}
