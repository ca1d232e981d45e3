//! Per-subject quartile thresholds.

use log::debug;

use crate::engine::ScoringConfig;
use crate::model::{Student, SubjectAnalysis};

/// Computes the thresholds for one subject from its recorded scores.
///
/// Scores are sorted descending; `excellent` is the score at
/// `floor(n * excellent_quantile)` and `poor` the score at
/// `floor(n * poor_quantile)`. An out-of-range index falls back to
/// `average ± fallback_margin`. A subject with no scores yields all zeros.
///
/// # Examples
///
/// ```
/// use seatwise::classify::analyze_scores;
/// use seatwise::engine::ScoringConfig;
///
/// let a = analyze_scores("math", &[60.0, 90.0, 70.0, 80.0], &ScoringConfig::default());
/// assert_eq!(a.average, 75.0);
/// assert_eq!(a.excellent, 80.0);
/// assert_eq!(a.poor, 60.0);
/// ```
pub fn analyze_scores(subject: &str, scores: &[f64], config: &ScoringConfig) -> SubjectAnalysis {
    if scores.is_empty() {
        return SubjectAnalysis {
            subject: subject.to_string(),
            average: 0.0,
            excellent: 0.0,
            poor: 0.0,
        };
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let n = sorted.len();
    let average = sorted.iter().sum::<f64>() / n as f64;
    let at = |q: f64| (n as f64 * q).floor() as usize;

    let excellent = sorted
        .get(at(config.excellent_quantile))
        .copied()
        .unwrap_or(average + config.fallback_margin);
    let poor = sorted
        .get(at(config.poor_quantile))
        .copied()
        .unwrap_or(average - config.fallback_margin);

    SubjectAnalysis {
        subject: subject.to_string(),
        average,
        excellent,
        poor,
    }
}

/// Computes thresholds for every subject in `subjects`, in that order.
///
/// Students without a score for a subject are skipped for that subject.
pub fn analyze_subjects(
    students: &[Student],
    subjects: &[String],
    config: &ScoringConfig,
) -> Vec<SubjectAnalysis> {
    subjects
        .iter()
        .map(|subject| {
            let scores: Vec<f64> = students.iter().filter_map(|s| s.score(subject)).collect();
            let analysis = analyze_scores(subject, &scores, config);
            debug!(
                "subject {}: n={} average={:.2} excellent={:.2} poor={:.2}",
                subject,
                scores.len(),
                analysis.average,
                analysis.excellent,
                analysis.poor
            );
            analysis
        })
        .collect()
}

/// Collects the distinct subject names across `students`, sorted.
pub fn collect_subjects(students: &[Student]) -> Vec<String> {
    let mut subjects: Vec<String> = students
        .iter()
        .flat_map(|s| s.scores.keys().cloned())
        .collect();
    subjects.sort();
    subjects.dedup();
    subjects
}
