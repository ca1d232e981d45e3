//! Classroom layout construction.
//!
//! Turns a classroom shape into empty tables and fills them, either with
//! selected pairs followed by leftover students ([`place_pairs`],
//! [`fill_leftovers`]) or by the two-pass score balancer
//! ([`balance_by_score`]). Tables nobody sits at are dropped by
//! [`finish_tables`].
//!
//! Capacity is the caller's precondition: students beyond the seat count are
//! left out without an error.

mod balance;
mod builder;
mod config;

pub use balance::balance_by_score;
pub use builder::{fill_leftovers, finish_tables, place_pairs};
pub use config::{ClassroomConfig, ClassroomLayout, GridConfig};
