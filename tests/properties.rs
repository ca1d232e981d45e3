//! Property tests over randomly generated cohorts.

use std::collections::HashSet;

use proptest::prelude::*;

use seatwise::classify::{analyze_scores, analyze_subjects, classify_students, collect_subjects};
use seatwise::engine::{ScoringConfig, SeatingConfig, SeatingRunner, Strategy as Mode};
use seatwise::layout::{ClassroomConfig, ClassroomLayout};
use seatwise::model::{Level, Student};
use seatwise::pairing::select_pairs;
use seatwise::stats::population_variance;

const SUBJECTS: [&str; 3] = ["math", "english", "physics"];

fn cohort_strategy(max_students: usize) -> impl Strategy<Value = Vec<Student>> {
    prop::collection::vec(prop::collection::vec(0.0f64..100.0, 2..=3), 0..max_students).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, scores)| {
                    scores.into_iter().zip(SUBJECTS).fold(
                        Student::new(format!("s{i}"), format!("S{i}"), i),
                        |s, (score, subject)| s.with_score(subject, score),
                    )
                })
                .collect()
        },
    )
}

fn layout_strategy() -> impl Strategy<Value = ClassroomLayout> {
    (1usize..4, 1usize..4, 1usize..5)
        .prop_map(|(groups, rows, seats)| ClassroomConfig::new(groups, rows, seats).into())
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Paired), Just(Mode::Balanced)]
}

proptest! {
    #[test]
    fn prop_runs_are_deterministic(
        students in cohort_strategy(24),
        layout in layout_strategy(),
        mode in mode_strategy(),
    ) {
        let config = SeatingConfig::default().with_strategy(mode);
        let mut a = students.clone();
        let mut b = students;
        let first = SeatingRunner::run(&mut a, &layout, &config).unwrap();
        let second = SeatingRunner::run(&mut b, &layout, &config).unwrap();
        let again = SeatingRunner::run(&mut a, &layout, &config).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &again);
    }

    #[test]
    fn prop_input_order_irrelevant(
        students in cohort_strategy(24),
        layout in layout_strategy(),
        mode in mode_strategy(),
    ) {
        let config = SeatingConfig::default().with_strategy(mode);
        let mut forward = students.clone();
        let mut reversed = students;
        reversed.reverse();
        let a = SeatingRunner::run(&mut forward, &layout, &config).unwrap();
        let b = SeatingRunner::run(&mut reversed, &layout, &config).unwrap();

        let seat_map = |tables: &[seatwise::model::Table]| -> Vec<Vec<String>> {
            tables
                .iter()
                .map(|t| t.students().map(|s| s.id.clone()).collect())
                .collect()
        };
        prop_assert_eq!(seat_map(&a.tables), seat_map(&b.tables));
        prop_assert_eq!(a.pair_count, b.pair_count);
    }

    #[test]
    fn prop_seats_conserved(
        students in cohort_strategy(40),
        layout in layout_strategy(),
        mode in mode_strategy(),
    ) {
        let n = students.len();
        let mut students = students;
        let config = SeatingConfig::default().with_strategy(mode);
        let result = SeatingRunner::run(&mut students, &layout, &config).unwrap();

        let ids: Vec<&str> = result
            .tables
            .iter()
            .flat_map(|t| t.students())
            .map(|s| s.id.as_str())
            .collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();

        prop_assert_eq!(ids.len(), n.min(layout.capacity()));
        prop_assert_eq!(unique.len(), ids.len());
        prop_assert_eq!(result.total_students, n);
        prop_assert!(result.tables.iter().all(|t| t.seated_count() > 0));
    }

    #[test]
    fn prop_thresholds_ordered(scores in prop::collection::vec(0.0f64..100.0, 1..50)) {
        let a = analyze_scores("math", &scores, &ScoringConfig::default());
        let max = scores.iter().copied().fold(f64::MIN, f64::max);
        let min = scores.iter().copied().fold(f64::MAX, f64::min);

        prop_assert!(a.excellent >= a.poor);
        prop_assert!(a.excellent <= max && a.poor >= min);
        prop_assert!(a.average <= max + 1e-9 && a.average >= min - 1e-9);
    }

    #[test]
    fn prop_selected_pairs_admissible(students in cohort_strategy(30)) {
        let mut students = students;
        let config = ScoringConfig::default();
        let subjects = collect_subjects(&students);
        let analysis = analyze_subjects(&students, &subjects, &config);
        classify_students(&mut students, &analysis, &config);

        let pairs = select_pairs(&students, &analysis, &config, false);
        let mut used = HashSet::new();
        for pair in &pairs {
            let (a, b) = (&students[pair.first], &students[pair.second]);
            let levels = [a.level_or_default(), b.level_or_default()];
            prop_assert!(!(levels.contains(&Level::Excellent) && levels.contains(&Level::Poor)));

            let (avg1, avg2) = (a.average_score().unwrap(), b.average_score().unwrap());
            prop_assert!((avg1 - avg2).abs() <= 0.3 * (avg1 + avg2) / 2.0 + 1e-9);

            prop_assert!(used.insert(pair.first));
            prop_assert!(used.insert(pair.second));
        }
        for w in pairs.windows(2) {
            prop_assert!(w[0].compatibility_score >= w[1].compatibility_score);
        }
    }

    #[test]
    fn prop_variance_non_negative(values in prop::collection::vec(-1000.0f64..1000.0, 0..40)) {
        prop_assert!(population_variance(&values) >= 0.0);
    }

    #[test]
    fn prop_variance_zero_for_constant(value in -1000.0f64..1000.0, n in 1usize..20) {
        prop_assert!(population_variance(&vec![value; n]).abs() < 1e-6);
    }
}
