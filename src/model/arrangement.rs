//! Seats, tables, pairs and the final arrangement.

use std::collections::BTreeMap;

use super::student::Student;
use crate::layout::ClassroomLayout;

/// Per-subject thresholds computed once from the whole cohort.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SubjectAnalysis {
    pub subject: String,

    /// Arithmetic mean of the recorded scores.
    pub average: f64,

    /// Score at the top-quartile position of the descending order.
    pub excellent: f64,

    /// Score at the bottom-quartile position of the descending order.
    pub poor: f64,
}

/// Two distinct students selected as seat neighbours.
///
/// `first` and `second` index into the student slice the pair was scored
/// from; `first < second` always holds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct StudentPair {
    pub first: usize,
    pub second: usize,
    pub compatibility_score: f64,

    /// Complement score per shared subject.
    pub subject_complements: BTreeMap<String, f64>,
}

impl StudentPair {
    pub fn contains(&self, index: usize) -> bool {
        self.first == index || self.second == index
    }
}

/// A physical seat, owned by exactly one table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Seat {
    pub row: usize,
    pub col: usize,
    pub table_id: usize,
    pub student: Option<Student>,
}

impl Seat {
    pub fn empty(row: usize, col: usize, table_id: usize) -> Self {
        Self {
            row,
            col,
            table_id,
            student: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.student.is_none()
    }
}

/// A seating unit: a desk or group of desks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Table {
    pub id: usize,
    pub seats: Vec<Seat>,

    /// Sum of seated students' total scores.
    pub total_score: f64,

    /// `total_score` over the seated count, 0 when nobody is seated.
    pub average_score: f64,
}

impl Table {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            seats: Vec::new(),
            total_score: 0.0,
            average_score: 0.0,
        }
    }

    pub fn free_seats(&self) -> usize {
        self.seats.iter().filter(|s| s.is_free()).count()
    }

    pub fn seated_count(&self) -> usize {
        self.seats.len() - self.free_seats()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.iter().all(Seat::is_free)
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.seats.iter().filter_map(|s| s.student.as_ref())
    }

    /// Seats `student` in the lowest-index free seat and adds its score to
    /// the running total.
    ///
    /// Returns the student back when the table is full.
    pub fn seat(&mut self, student: Student) -> Result<(), Student> {
        match self.seats.iter_mut().find(|s| s.is_free()) {
            Some(seat) => {
                self.total_score += student.total_score();
                seat.student = Some(student);
                Ok(())
            }
            None => Err(student),
        }
    }

    /// Recomputes `total_score` and `average_score` from the seated students.
    pub fn refresh_scores(&mut self) {
        let (sum, count) = self
            .students()
            .fold((0.0, 0usize), |(sum, n), s| (sum + s.total_score(), n + 1));
        self.total_score = sum;
        self.average_score = if count > 0 { sum / count as f64 } else { 0.0 };
    }
}

/// The engine's output for one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ArrangementResult {
    /// Non-empty tables in layout order.
    pub tables: Vec<Table>,

    /// Number of input students, seated or not.
    pub total_students: usize,

    /// Mean total score over all input students.
    pub average_score: f64,

    /// Balance diagnostic: population variance of pair compatibility scores
    /// (paired runs) or of table averages (balanced runs).
    pub score_variance: f64,

    pub layout: ClassroomLayout,

    /// Thresholds used for classification; empty for balanced runs.
    pub subject_analysis: Vec<SubjectAnalysis>,

    /// Number of pairs the selector produced.
    pub pair_count: usize,
}

impl ArrangementResult {
    /// Number of students that received a seat.
    pub fn seated_count(&self) -> usize {
        self.tables.iter().map(Table::seated_count).sum()
    }

    /// Finds the seat holding the student with `student_id`.
    pub fn find_seat(&self, student_id: &str) -> Option<&Seat> {
        self.tables
            .iter()
            .flat_map(|t| t.seats.iter())
            .find(|s| s.student.as_ref().is_some_and(|st| st.id == student_id))
    }
}
