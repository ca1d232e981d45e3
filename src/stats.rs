//! Summary statistics over an arrangement.

use std::collections::BTreeMap;

use crate::model::{Level, Student, StudentPair, Table};

/// Population variance (divisor `n`). Returns 0 for an empty slice.
///
/// # Examples
///
/// ```
/// use seatwise::stats::population_variance;
///
/// assert_eq!(population_variance(&[62.5, 67.5]), 6.25);
/// assert_eq!(population_variance(&[]), 0.0);
/// ```
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

/// Mean total score over all students, 0 for an empty cohort.
pub fn overall_average(students: &[Student]) -> f64 {
    if students.is_empty() {
        return 0.0;
    }
    students.iter().map(Student::total_score).sum::<f64>() / students.len() as f64
}

/// Variance of the table averages, ignoring tables whose average is zero.
pub fn table_variance(tables: &[Table]) -> f64 {
    let averages: Vec<f64> = tables
        .iter()
        .map(|t| t.average_score)
        .filter(|&avg| avg > 0.0)
        .collect();
    population_variance(&averages)
}

/// Variance of the selected pairs' compatibility scores.
pub fn pair_variance(pairs: &[StudentPair]) -> f64 {
    let scores: Vec<f64> = pairs.iter().map(|p| p.compatibility_score).collect();
    population_variance(&scores)
}

/// Number of students per level, every level present; unclassified students
/// count as average.
pub fn level_distribution(students: &[Student]) -> BTreeMap<Level, usize> {
    let mut counts: BTreeMap<Level, usize> = Level::ALL.iter().map(|&l| (l, 0)).collect();
    for student in students {
        *counts.entry(student.level_or_default()).or_insert(0) += 1;
    }
    counts
}
