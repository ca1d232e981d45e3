//! Building students from parsed spreadsheet rows.
//!
//! File reading stays with the caller; this module takes rows whose cells
//! are already numbers (or absent) and turns them into [`Student`] records,
//! skipping rows that cannot be seated meaningfully.

use log::debug;

use crate::engine::Strategy;
use crate::error::SeatingError;
use crate::layout::ClassroomLayout;
use crate::model::{Student, SINGLE_SUBJECT};

/// Minimum number of subjects for a paired run.
pub const MIN_PAIRED_SUBJECTS: usize = 2;

/// One parsed data row: a name followed by one cell per subject column.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawRecord {
    pub name: Option<String>,
    pub cells: Vec<Option<f64>>,
}

impl RawRecord {
    pub fn new(name: impl Into<String>, cells: Vec<Option<f64>>) -> Self {
        Self {
            name: Some(name.into()),
            cells,
        }
    }
}

/// A validated cohort with its subject list in column order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    pub subjects: Vec<String>,
    pub students: Vec<Student>,
}

impl Roster {
    /// Builds a roster from subject headers and data rows.
    ///
    /// Rows with a blank name, or without a single finite score, are
    /// skipped. Blank headers drop their column. Each kept row becomes
    /// `student_<n>` where `n` is its 1-based data row number, which also
    /// serves as `original_index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatwise::roster::{RawRecord, Roster};
    ///
    /// let roster = Roster::from_rows(
    ///     vec!["math".into(), "english".into()],
    ///     vec![
    ///         RawRecord::new("Ada", vec![Some(90.0), Some(80.0)]),
    ///         RawRecord::new("  ", vec![Some(70.0), Some(60.0)]),
    ///         RawRecord::new("Bob", vec![None, Some(75.0)]),
    ///     ],
    /// );
    /// assert_eq!(roster.students.len(), 2);
    /// assert_eq!(roster.students[1].id, "student_3");
    /// assert_eq!(roster.students[1].subject_count(), 1);
    /// ```
    pub fn from_rows(subjects: Vec<String>, rows: Vec<RawRecord>) -> Self {
        let columns: Vec<Option<String>> = subjects
            .iter()
            .map(|s| Some(s.trim().to_string()).filter(|s| !s.is_empty()))
            .collect();

        let mut students = Vec::with_capacity(rows.len());
        let mut skipped = 0usize;
        for (i, row) in rows.into_iter().enumerate() {
            let row_number = i + 1;
            let name = row.name.as_deref().map(str::trim).unwrap_or_default();
            if name.is_empty() {
                skipped += 1;
                continue;
            }

            let mut student = Student::new(format!("student_{row_number}"), name, row_number);
            for (subject, cell) in columns.iter().zip(row.cells) {
                if let (Some(subject), Some(score)) = (subject, cell.filter(|v| v.is_finite())) {
                    student.scores.insert(subject.clone(), score);
                }
            }
            if student.scores.is_empty() {
                skipped += 1;
                continue;
            }
            students.push(student);
        }

        if skipped > 0 {
            debug!("skipped {} malformed rows", skipped);
        }
        Self {
            subjects: columns.into_iter().flatten().collect(),
            students,
        }
    }

    /// Builds a single-score roster from `(name, score)` rows.
    pub fn from_scores<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|(name, score)| RawRecord::new(name, vec![Some(score)]))
            .collect();
        Self::from_rows(vec![SINGLE_SUBJECT.to_string()], rows)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Checks the preconditions a caller should enforce before running.
    ///
    /// The engine itself tolerates all of these; this reports them up front:
    /// an empty roster, fewer than [`MIN_PAIRED_SUBJECTS`] subjects for an
    /// explicitly paired run, and more students than seats.
    pub fn check_ready(
        &self,
        strategy: Strategy,
        layout: &ClassroomLayout,
    ) -> Result<(), SeatingError> {
        if self.students.is_empty() {
            return Err(SeatingError::EmptyRoster);
        }
        if strategy == Strategy::Paired && self.subjects.len() < MIN_PAIRED_SUBJECTS {
            return Err(SeatingError::TooFewSubjects {
                found: self.subjects.len(),
                required: MIN_PAIRED_SUBJECTS,
            });
        }
        let capacity = layout.capacity();
        if self.students.len() > capacity {
            return Err(SeatingError::CapacityExceeded {
                students: self.students.len(),
                capacity,
            });
        }
        Ok(())
    }
}
