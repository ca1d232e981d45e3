//! Two-pass score balancing for single-score cohorts.

use log::debug;

use crate::model::{Student, Table};

/// Distributes students so per-table score sums even out, without pairing.
///
/// Students are ranked by score, highest first; equal scores go by
/// `original_index`, so the caller's slice order does not matter.
///
/// 1. The top half (rounded up) is dealt round-robin, one per table; a
///    student whose table is already full is deferred to the second pass.
/// 2. Everyone else is walked from the lowest score upward and seated at the
///    table with the highest running total that still has a free seat (ties
///    go to the lower table index). This pulls weak scores toward strong
///    tables. If no table has a free seat, the table under a reverse-walking
///    index is tried instead.
///
/// Returns a flag per student marking who was seated.
pub fn balance_by_score(tables: &mut [Table], students: &[Student]) -> Vec<bool> {
    let mut seated = vec![false; students.len()];
    if tables.is_empty() {
        return seated;
    }

    let mut ranked: Vec<usize> = (0..students.len()).collect();
    ranked.sort_by(|&a, &b| {
        students[b]
            .total_score()
            .total_cmp(&students[a].total_score())
            .then(students[a].original_index.cmp(&students[b].original_index))
    });

    let top_half = students.len().div_ceil(2);
    let mut table_index = 0usize;
    for &i in &ranked[..top_half] {
        if tables[table_index].seat(students[i].clone()).is_ok() {
            seated[i] = true;
        }
        table_index = (table_index + 1) % tables.len();
    }

    let mut table_index = tables.len() - 1;
    for &i in ranked.iter().rev() {
        if !seated[i] {
            let target = strongest_open_table(tables).unwrap_or(table_index);
            if tables[target].seat(students[i].clone()).is_ok() {
                seated[i] = true;
            }
        }
        table_index = if table_index > 0 {
            table_index - 1
        } else {
            tables.len() - 1
        };
    }

    debug!(
        "balanced {} of {} students across {} tables",
        seated.iter().filter(|&&s| s).count(),
        students.len(),
        tables.len()
    );
    seated
}

/// Index of the table with the highest running total and a free seat.
fn strongest_open_table(tables: &[Table]) -> Option<usize> {
    tables
        .iter()
        .enumerate()
        .filter(|(_, t)| t.free_seats() > 0)
        .fold(None, |best: Option<(usize, f64)>, (i, t)| match best {
            Some((_, total)) if total >= t.total_score => best,
            _ => Some((i, t.total_score)),
        })
        .map(|(i, _)| i)
}
