//! Error types.

use thiserror::Error;

/// Errors reported by configuration validation and the roster readiness
/// checks.
///
/// The arrangement algorithms themselves never fail on data: empty cohorts,
/// missing subjects and capacity overflow all degrade to default values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SeatingError {
    #[error("invalid classroom: {0}")]
    InvalidClassroom(String),

    #[error("invalid scoring config: {0}")]
    InvalidScoring(String),

    #[error("no valid student records")]
    EmptyRoster,

    #[error("at least {required} subjects are required, found {found}")]
    TooFewSubjects { found: usize, required: usize },

    #[error("classroom holds {capacity} students but {students} were supplied")]
    CapacityExceeded { students: usize, capacity: usize },
}
