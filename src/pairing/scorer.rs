//! Pairwise compatibility scoring.

use std::collections::BTreeMap;

use log::trace;

use crate::engine::ScoringConfig;
use crate::model::{Level, Student, StudentPair, SubjectAnalysis};

/// Whether two students may be seated as a pair.
///
/// Rejects the extreme level combination {excellent, poor} and any pair
/// whose average scores differ by more than `max_relative_gap` of their
/// mean. Students without any score have no average and are never
/// admissible.
pub fn is_admissible(a: &Student, b: &Student, config: &ScoringConfig) -> bool {
    let (la, lb) = (a.level_or_default(), b.level_or_default());
    if matches!(
        (la, lb),
        (Level::Excellent, Level::Poor) | (Level::Poor, Level::Excellent)
    ) {
        return false;
    }

    let (Some(avg1), Some(avg2)) = (a.average_score(), b.average_score()) else {
        return false;
    };
    let mean = (avg1 + avg2) / 2.0;
    (avg1 - avg2).abs() <= config.max_relative_gap * mean
}

/// Complement score for one subject both students were scored in.
///
/// Both scores are normalized onto `[min(poor, 0), max(excellent, ceiling)]`.
/// The average bonus peaks when the pair's mean sits mid-range; the
/// difference bonus peaks when the gap equals `target_difference` and is
/// zero from `difference_cutoff` on.
pub fn subject_complement(
    score1: f64,
    score2: f64,
    analysis: &SubjectAnalysis,
    config: &ScoringConfig,
) -> f64 {
    let floor = analysis.poor.min(0.0);
    let range = analysis.excellent.max(config.normalization_ceiling) - floor;
    let normalize = |s: f64| ((s - floor) / range).clamp(0.0, 1.0);

    let (n1, n2) = (normalize(score1), normalize(score2));
    let avg = (n1 + n2) / 2.0;
    let diff = (n1 - n2).abs();

    let average_bonus = 1.0 - 2.0 * (avg - 0.5).abs();
    let difference_bonus = if diff < config.difference_cutoff {
        1.0 - (diff - config.target_difference).abs() / config.target_difference
    } else {
        0.0
    };

    (average_bonus + difference_bonus) * config.subject_weight
}

/// Unweighted level proximity bonus: adjacent levels 10, same level 7,
/// two apart 3, otherwise 0.
pub fn level_bonus(a: Level, b: Level) -> f64 {
    match a.rank().abs_diff(b.rank()) {
        1 => 10.0,
        0 => 7.0,
        2 => 3.0,
        _ => 0.0,
    }
}

/// Scores the pair `(students[first], students[second])`.
///
/// Returns `None` for inadmissible pairs. The compatibility score is the sum
/// of the per-subject complement scores plus the weighted level bonus; with
/// no shared subject it is the level bonus alone. `first` is the student
/// with the lower `original_index` (slice position breaks a tie).
pub fn score_pair(
    students: &[Student],
    first: usize,
    second: usize,
    analysis: &[SubjectAnalysis],
    config: &ScoringConfig,
) -> Option<StudentPair> {
    let (a, b) = (&students[first], &students[second]);
    if !is_admissible(a, b, config) {
        return None;
    }

    let subject_complements: BTreeMap<String, f64> = analysis
        .iter()
        .filter_map(|sa| {
            let (s1, s2) = (a.score(&sa.subject)?, b.score(&sa.subject)?);
            Some((sa.subject.clone(), subject_complement(s1, s2, sa, config)))
        })
        .collect();

    let bonus = level_bonus(a.level_or_default(), b.level_or_default()) * config.level_weight;
    let compatibility_score = subject_complements.values().sum::<f64>() + bonus;

    trace!(
        "pair {} + {}: compatibility {:.2} (level bonus {:.0})",
        a.id,
        b.id,
        compatibility_score,
        bonus
    );

    let key = |i: usize| (students[i].original_index, i);
    let (first, second) = if key(first) <= key(second) {
        (first, second)
    } else {
        (second, first)
    };

    Some(StudentPair {
        first,
        second,
        compatibility_score,
        subject_complements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn math_analysis() -> Vec<SubjectAnalysis> {
        vec![SubjectAnalysis {
            subject: "math".into(),
            average: 70.0,
            excellent: 85.0,
            poor: 55.0,
        }]
    }

    fn leveled(id: &str, math: f64, level: Level) -> Student {
        let mut s = Student::new(id, id, 0).with_score("math", math);
        s.level = Some(level);
        s
    }

    #[test]
    fn test_extreme_levels_rejected() {
        let a = leveled("a", 70.0, Level::Excellent);
        let b = leveled("b", 70.0, Level::Poor);
        assert!(!is_admissible(&a, &b, &ScoringConfig::default()));
        assert!(!is_admissible(&b, &a, &ScoringConfig::default()));
    }

    #[test]
    fn test_relative_gap_rejected() {
        // gap 40 > 0.3 * 80
        let a = leveled("a", 100.0, Level::Good);
        let b = leveled("b", 60.0, Level::Average);
        assert!(!is_admissible(&a, &b, &ScoringConfig::default()));
    }

    #[test]
    fn test_relative_gap_boundary_admitted() {
        // gap 30 == 0.3 * 100
        let a = leveled("a", 115.0, Level::Good);
        let b = leveled("b", 85.0, Level::Average);
        assert!(is_admissible(&a, &b, &ScoringConfig::default()));
    }

    #[test]
    fn test_no_scores_not_admissible() {
        let a = Student::new("a", "A", 0);
        let b = leveled("b", 70.0, Level::Average);
        assert!(!is_admissible(&a, &b, &ScoringConfig::default()));
    }

    #[test]
    fn test_subject_complement_values() {
        // norm 0.8 / 0.6: avg 0.7 -> 0.6; diff 0.2 -> 1 - 0.1/0.3
        let score = subject_complement(80.0, 60.0, &math_analysis()[0], &ScoringConfig::default());
        let expected = (0.6 + (1.0 - 0.1 / 0.3)) * 50.0;
        assert!((score - expected).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_subject_complement_peak() {
        // norm 0.65 / 0.35: avg 0.5, diff 0.3 -> both bonuses 1
        let score = subject_complement(65.0, 35.0, &math_analysis()[0], &ScoringConfig::default());
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_subject_complement_large_gap_no_difference_bonus() {
        // norm 0.9 / 0.2: avg 0.55 -> 0.9; diff 0.7 >= 0.6 -> 0
        let score = subject_complement(90.0, 20.0, &math_analysis()[0], &ScoringConfig::default());
        assert!((score - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_level_bonus_table() {
        assert!((level_bonus(Level::Good, Level::Average) - 10.0).abs() < 1e-10);
        assert!((level_bonus(Level::Good, Level::Good) - 7.0).abs() < 1e-10);
        assert!((level_bonus(Level::Excellent, Level::Average) - 3.0).abs() < 1e-10);
        assert!((level_bonus(Level::Excellent, Level::Poor) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_pair_total() {
        let students = vec![leveled("a", 80.0, Level::Good), leveled("b", 60.0, Level::Good)];
        let pair = score_pair(&students, 1, 0, &math_analysis(), &ScoringConfig::default())
            .expect("admissible");

        let complement = (0.6 + (1.0 - 0.1 / 0.3)) * 50.0;
        assert_eq!((pair.first, pair.second), (0, 1));
        assert!((pair.compatibility_score - (complement + 140.0)).abs() < 1e-9);
        assert!((pair.subject_complements["math"] - complement).abs() < 1e-9);
    }

    #[test]
    fn test_score_pair_no_shared_subjects() {
        let mut a = Student::new("a", "A", 0).with_score("math", 70.0);
        let mut b = Student::new("b", "B", 1).with_score("art", 72.0);
        a.level = Some(Level::Good);
        b.level = Some(Level::Average);
        let analysis = vec![
            math_analysis()[0].clone(),
            SubjectAnalysis {
                subject: "art".into(),
                average: 72.0,
                excellent: 72.0,
                poor: 72.0,
            },
        ];

        let pair = score_pair(&[a, b], 0, 1, &analysis, &ScoringConfig::default()).unwrap();
        assert!(pair.subject_complements.is_empty());
        assert!((pair.compatibility_score - 200.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_pair_orders_by_original_index() {
        let mut a = Student::new("a", "A", 7).with_score("math", 70.0);
        let mut b = Student::new("b", "B", 2).with_score("math", 72.0);
        a.level = Some(Level::Average);
        b.level = Some(Level::Average);

        let pair = score_pair(&[a, b], 0, 1, &math_analysis(), &ScoringConfig::default()).unwrap();
        assert_eq!((pair.first, pair.second), (1, 0));
    }
}
