//! Seating run: classify, pair, place, summarize.

use log::debug;

use super::config::{SeatingConfig, Strategy};
use crate::classify::{analyze_subjects, classify_students, collect_subjects};
use crate::error::SeatingError;
use crate::layout::{
    balance_by_score, fill_leftovers, finish_tables, place_pairs, ClassroomLayout,
};
use crate::model::{ArrangementResult, Student};
use crate::pairing::select_pairs;
use crate::stats::{overall_average, pair_variance, table_variance};

/// Executes a seating run.
///
/// Data flows one way: classification, pair scoring, greedy selection,
/// placement, statistics. Each run allocates its own tables and pairs; the
/// only change made to the caller's students is the attached `level`.
pub struct SeatingRunner;

impl SeatingRunner {
    /// Arranges `students` into `layout`.
    ///
    /// Fails only on an invalid layout or scoring configuration. Empty
    /// cohorts, missing subjects, unpairable students and capacity overflow
    /// all produce a result; students beyond capacity are left out.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatwise::engine::{SeatingConfig, SeatingRunner};
    /// use seatwise::layout::ClassroomConfig;
    /// use seatwise::model::Student;
    ///
    /// let mut students: Vec<Student> = [90.0, 80.0, 70.0, 60.0]
    ///     .iter()
    ///     .enumerate()
    ///     .map(|(i, &s)| Student::with_single_score(format!("s{i}"), format!("S{i}"), s, i))
    ///     .collect();
    ///
    /// let layout = ClassroomConfig::new(1, 1, 4).into();
    /// let result = SeatingRunner::run(&mut students, &layout, &SeatingConfig::default()).unwrap();
    /// assert_eq!(result.tables.len(), 1);
    /// assert_eq!(result.tables[0].average_score, 75.0);
    /// assert_eq!(result.score_variance, 0.0);
    /// ```
    pub fn run(
        students: &mut [Student],
        layout: &ClassroomLayout,
        config: &SeatingConfig,
    ) -> Result<ArrangementResult, SeatingError> {
        layout.validate()?;
        config.scoring.validate()?;

        let subjects = collect_subjects(students);
        let strategy = resolve_strategy(config.strategy, subjects.len());
        debug!(
            "arranging {} students ({} subjects) into {} seats using {:?}",
            students.len(),
            subjects.len(),
            layout.capacity(),
            strategy
        );

        let mut tables = layout.build_tables();
        let (subject_analysis, pair_count, pair_scores_variance) = match strategy {
            Strategy::Paired => {
                let analysis = analyze_subjects(students, &subjects, &config.scoring);
                classify_students(students, &analysis, &config.scoring);

                let pairs = select_pairs(students, &analysis, &config.scoring, config.parallel);
                let (mut seated, placed) = place_pairs(&mut tables, students, &pairs);
                fill_leftovers(&mut tables, students, &mut seated);
                (analysis, placed.len(), Some(pair_variance(&placed)))
            }
            Strategy::Balanced | Strategy::Auto => {
                balance_by_score(&mut tables, students);
                (Vec::new(), 0, None)
            }
        };

        let tables = finish_tables(tables);
        let score_variance = pair_scores_variance.unwrap_or_else(|| table_variance(&tables));

        Ok(ArrangementResult {
            tables,
            total_students: students.len(),
            average_score: overall_average(students),
            score_variance,
            layout: *layout,
            subject_analysis,
            pair_count,
        })
    }
}

/// `Auto` pairs when there are at least two subjects and balances otherwise.
fn resolve_strategy(strategy: Strategy, subject_count: usize) -> Strategy {
    match strategy {
        Strategy::Auto if subject_count >= 2 => Strategy::Paired,
        Strategy::Auto => Strategy::Balanced,
        other => other,
    }
}
