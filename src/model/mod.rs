//! Plain records shared by every stage of the engine.
//!
//! Students are owned by the caller; tables and seats are built fresh for
//! each run and hold clones of the students placed in them.

mod arrangement;
mod student;

pub use arrangement::{ArrangementResult, Seat, StudentPair, SubjectAnalysis, Table};
pub use student::{Level, Student, SINGLE_SUBJECT};
