//! Seating engine.
//!
//! One engine covers both cohort shapes:
//!
//! - **Paired**: multi-subject cohorts are classified into levels, scored
//!   pairwise for complementarity, greedily matched and seated pair by pair.
//! - **Balanced**: single-score cohorts skip pairing and are spread so that
//!   per-table sums even out.
//!
//! [`Strategy::Auto`] picks between them from the number of subjects.
//! Runs are synchronous, deterministic and keep no state between calls.

mod config;
mod runner;

pub use config::{ScoringConfig, SeatingConfig, Strategy};
pub use runner::SeatingRunner;
