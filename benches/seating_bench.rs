//! Criterion benchmarks for the seating engine.
//!
//! Uses synthetic cohorts with uniformly random subject scores so that
//! timings reflect the O(n²) pair scoring and sort, not any particular class.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seatwise::engine::{ScoringConfig, SeatingConfig, SeatingRunner, Strategy};
use seatwise::layout::{ClassroomConfig, ClassroomLayout};
use seatwise::model::Student;
use seatwise::pairing::select_pairs;

const SUBJECTS: [&str; 4] = ["math", "english", "physics", "chemistry"];

// ===========================================================================
// Synthetic cohorts
// ===========================================================================

fn cohort(n: usize, subjects: usize, seed: u64) -> Vec<Student> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            SUBJECTS[..subjects].iter().fold(
                Student::new(format!("student_{i}"), format!("Student {i}"), i),
                |s, subject| s.with_score(*subject, rng.random_range(35.0..100.0)),
            )
        })
        .collect()
}

/// Two-seat tables with room for everyone.
fn classroom_for(n: usize) -> ClassroomLayout {
    let groups = 6;
    let rows = n.div_ceil(groups * 2).max(1);
    ClassroomConfig::new(groups, rows, 2).into()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_paired(c: &mut Criterion) {
    let mut group = c.benchmark_group("paired_run");
    group.sample_size(10);

    for &n in &[30usize, 60, 120] {
        let students = cohort(n, 4, 42);
        let layout = classroom_for(n);
        let config = SeatingConfig::default().with_strategy(Strategy::Paired);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(students, layout, config),
            |b, (s, l, c)| {
                b.iter(|| {
                    let mut students = s.clone();
                    let result = SeatingRunner::run(&mut students, black_box(l), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_pair_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_pairs");
    group.sample_size(10);

    for &n in &[60usize, 200] {
        let mut students = cohort(n, 3, 7);
        let config = ScoringConfig::default();
        let subjects = seatwise::classify::collect_subjects(&students);
        let analysis = seatwise::classify::analyze_subjects(&students, &subjects, &config);
        seatwise::classify::classify_students(&mut students, &analysis, &config);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let pairs = select_pairs(black_box(&students), &analysis, &config, false);
                black_box(pairs)
            })
        });
    }
    group.finish();
}

fn bench_balanced(c: &mut Criterion) {
    let mut group = c.benchmark_group("balanced_run");
    group.sample_size(10);

    for &n in &[48usize, 200] {
        let students = cohort(n, 1, 3);
        let layout = classroom_for(n);
        let config = SeatingConfig::default().with_strategy(Strategy::Balanced);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(students, layout, config),
            |b, (s, l, c)| {
                b.iter(|| {
                    let mut students = s.clone();
                    let result = SeatingRunner::run(&mut students, black_box(l), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_paired, bench_pair_selection, bench_balanced);
criterion_main!(benches);
