//! Majority-vote level assignment.

use crate::engine::ScoringConfig;
use crate::model::{Level, Student, SubjectAnalysis};

/// Classifies one student against the subject thresholds.
///
/// Only subjects the student has a score in take part in the vote. A student
/// is `Excellent` when at least `majority_ratio` of those subjects reach the
/// excellent threshold, `Poor` when as many sit at or below the poor
/// threshold, otherwise `Good` if excellent subjects outnumber poor ones and
/// `Average` if not. A student with no scored subject is `Average`.
pub fn classify_level(
    student: &Student,
    analysis: &[SubjectAnalysis],
    config: &ScoringConfig,
) -> Level {
    let mut subject_count = 0usize;
    let mut excellent_count = 0usize;
    let mut poor_count = 0usize;

    for a in analysis {
        let Some(score) = student.score(&a.subject) else {
            continue;
        };
        subject_count += 1;
        if score >= a.excellent {
            excellent_count += 1;
        }
        if score <= a.poor {
            poor_count += 1;
        }
    }

    if subject_count == 0 {
        return Level::Average;
    }

    let quorum = config.majority_ratio * subject_count as f64;
    if excellent_count as f64 >= quorum {
        Level::Excellent
    } else if poor_count as f64 >= quorum {
        Level::Poor
    } else if excellent_count > poor_count {
        Level::Good
    } else {
        Level::Average
    }
}

/// Attaches a level to every student.
///
/// Levels depend only on scores and thresholds, so running this again on
/// unchanged input leaves the same levels in place.
pub fn classify_students(
    students: &mut [Student],
    analysis: &[SubjectAnalysis],
    config: &ScoringConfig,
) {
    for student in students.iter_mut() {
        student.level = Some(classify_level(student, analysis, config));
    }
}
