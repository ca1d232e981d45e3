//! Complementary pairing.
//!
//! Scores every admissible pair of classified students and greedily selects
//! a matching in descending compatibility order:
//!
//! - **Admissibility**: excellent/poor pairs and pairs whose averages differ
//!   by more than 30% of their mean are never scored.
//! - **Complement**: per shared subject, rewards a mid-range combined score
//!   and a moderate gap between the two students.
//! - **Level proximity**: a bonus that dominates the total, favouring
//!   adjacent levels over equal ones.
//!
//! With the `parallel` feature, candidate scoring runs on rayon; selection
//! stays sequential so the result is identical either way.

mod scorer;
mod selector;

pub use scorer::{is_admissible, level_bonus, score_pair, subject_complement};
pub use selector::{candidate_pairs, select_from, select_pairs};
