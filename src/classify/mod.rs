//! Score classification.
//!
//! Derives per-subject quartile thresholds from the cohort and assigns each
//! student a discrete [`Level`](crate::model::Level) by majority vote across
//! the subjects the student was scored in. Thresholds adapt to the cohort's
//! own distribution rather than using fixed cut-offs.

mod analysis;
mod level;

pub use analysis::{analyze_scores, analyze_subjects, collect_subjects};
pub use level::{classify_level, classify_students};
