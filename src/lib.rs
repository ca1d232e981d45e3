//! Classroom seat assignment engine.
//!
//! Turns a list of students, each with one or more subject scores, into a
//! concrete seat map where neighbours complement each other instead of
//! clustering by rank:
//!
//! - **Classification** ([`classify`]): per-subject quartile thresholds and a
//!   majority-vote performance level per student.
//! - **Pairing** ([`pairing`]): admissibility filter, compatibility scoring
//!   and greedy matching.
//! - **Layout** ([`layout`]): row-major table construction, pair placement,
//!   leftover distribution and single-score balancing.
//! - **Statistics** ([`stats`]): overall average and a table-balance variance.
//! - **Engine** ([`engine`]): the single entry point, [`SeatingRunner`],
//!   that chains the stages for either cohort shape.
//!
//! # Architecture
//!
//! Data flows one way (classify, score, select, place, summarize) over plain
//! records. The assignment is heuristic, not an exact optimum, and every run
//! is deterministic. Reading spreadsheets and rendering seat maps are left to
//! the caller; [`roster`] covers the boundary in between.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` on every public record and config.
//! - `parallel`: candidate pair scoring on rayon.
//! - `wasm`: `arrangeSeats` / `buildRoster` browser bindings.

pub mod classify;
pub mod engine;
pub mod error;
pub mod layout;
pub mod model;
pub mod pairing;
pub mod roster;
pub mod stats;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use engine::{SeatingConfig, SeatingRunner, Strategy};
pub use error::SeatingError;
pub use layout::{ClassroomConfig, ClassroomLayout, GridConfig};
pub use model::{ArrangementResult, Student};
