//! Greedy pair selection.

use log::debug;

use super::scorer::score_pair;
use crate::engine::ScoringConfig;
use crate::model::{Student, StudentPair, SubjectAnalysis};

/// Scores every unordered pair of slice positions `i < j`, dropping
/// inadmissible ones.
///
/// Pairs come back in enumeration order (`(0,1), (0,2), ..., (1,2), ...`)
/// regardless of `parallel`; within a pair, `first` is the student with the
/// lower `original_index`.
pub fn candidate_pairs(
    students: &[Student],
    analysis: &[SubjectAnalysis],
    config: &ScoringConfig,
    parallel: bool,
) -> Vec<StudentPair> {
    let candidates = score_all(students, analysis, config, parallel);
    debug!(
        "{} admissible pairs out of {}",
        candidates.len(),
        students.len() * students.len().saturating_sub(1) / 2
    );
    candidates
}

#[cfg(feature = "parallel")]
fn score_all(
    students: &[Student],
    analysis: &[SubjectAnalysis],
    config: &ScoringConfig,
    parallel: bool,
) -> Vec<StudentPair> {
    use rayon::prelude::*;

    if !parallel {
        return score_sequential(students, analysis, config);
    }
    let n = students.len();
    (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            (i + 1..n).filter_map(move |j| score_pair(students, i, j, analysis, config))
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all(
    students: &[Student],
    analysis: &[SubjectAnalysis],
    config: &ScoringConfig,
    _parallel: bool,
) -> Vec<StudentPair> {
    score_sequential(students, analysis, config)
}

fn score_sequential(
    students: &[Student],
    analysis: &[SubjectAnalysis],
    config: &ScoringConfig,
) -> Vec<StudentPair> {
    let n = students.len();
    (0..n)
        .flat_map(|i| (i + 1..n).filter_map(move |j| score_pair(students, i, j, analysis, config)))
        .collect()
}

/// Greedily picks a matching from `candidates` over `students`.
///
/// Candidates are sorted by compatibility descending. Equal scores go by the
/// pair's `original_index` values, then stay in enumeration order. A pair is
/// taken only when neither student has been claimed by an earlier pick.
/// There is no backtracking: this approximates a maximum-weight matching and
/// may leave students unpaired.
pub fn select_from(mut candidates: Vec<StudentPair>, students: &[Student]) -> Vec<StudentPair> {
    let key = |p: &StudentPair| {
        (
            students[p.first].original_index,
            students[p.second].original_index,
        )
    };
    candidates.sort_by(|a, b| {
        b.compatibility_score
            .total_cmp(&a.compatibility_score)
            .then_with(|| key(a).cmp(&key(b)))
    });

    let mut claimed = vec![false; students.len()];
    let mut selected = Vec::with_capacity(students.len() / 2);
    for pair in candidates {
        if claimed[pair.first] || claimed[pair.second] {
            continue;
        }
        claimed[pair.first] = true;
        claimed[pair.second] = true;
        selected.push(pair);
    }
    selected
}

/// Scores all candidate pairs and selects a greedy matching.
///
/// Cost is O(n²) scoring plus an O(n² log n) sort, fine for classroom-sized
/// cohorts.
///
/// # Examples
///
/// ```
/// use seatwise::classify::{analyze_subjects, classify_students, collect_subjects};
/// use seatwise::engine::ScoringConfig;
/// use seatwise::model::Student;
/// use seatwise::pairing::select_pairs;
///
/// let mut students = vec![
///     Student::new("a", "A", 0).with_score("math", 80.0).with_score("art", 70.0),
///     Student::new("b", "B", 1).with_score("math", 70.0).with_score("art", 80.0),
///     Student::new("c", "C", 2).with_score("math", 75.0).with_score("art", 75.0),
/// ];
/// let config = ScoringConfig::default();
/// let subjects = collect_subjects(&students);
/// let analysis = analyze_subjects(&students, &subjects, &config);
/// classify_students(&mut students, &analysis, &config);
///
/// let pairs = select_pairs(&students, &analysis, &config, false);
/// assert_eq!(pairs.len(), 1);
/// ```
pub fn select_pairs(
    students: &[Student],
    analysis: &[SubjectAnalysis],
    config: &ScoringConfig,
    parallel: bool,
) -> Vec<StudentPair> {
    let candidates = candidate_pairs(students, analysis, config, parallel);
    let selected = select_from(candidates, students);
    debug!(
        "selected {} pairs, {} students unpaired",
        selected.len(),
        students.len() - 2 * selected.len()
    );
    selected
}
