//! Pair placement and leftover distribution.

use log::{debug, warn};

use crate::model::{Student, StudentPair, Table};

/// Seats each selected pair side by side, in selection order.
///
/// A pair goes into the two lowest-index free seats of the first table, at
/// or after the cursor, that still has at least two free seats. The cursor
/// only moves past a table once it has fewer than two free seats, so tables
/// fill to capacity before the next one is opened and a pair is never split
/// across tables. Pairs that find no such table are left for
/// [`fill_leftovers`].
///
/// Returns a flag per student marking who was seated, and the pairs that
/// actually share a table.
pub fn place_pairs(
    tables: &mut [Table],
    students: &[Student],
    pairs: &[StudentPair],
) -> (Vec<bool>, Vec<StudentPair>) {
    let mut seated = vec![false; students.len()];
    let mut placed = Vec::with_capacity(pairs.len());
    let mut cursor = 0usize;

    for pair in pairs {
        while cursor < tables.len() && tables[cursor].free_seats() < 2 {
            cursor += 1;
        }
        let Some(table) = tables.get_mut(cursor) else {
            break;
        };

        let mut together = true;
        for index in [pair.first, pair.second] {
            if table.seat(students[index].clone()).is_ok() {
                seated[index] = true;
            } else {
                together = false;
            }
        }
        if together {
            placed.push(pair.clone());
        }
    }

    if placed.len() < pairs.len() {
        debug!(
            "{} of {} selected pairs found no shared table",
            pairs.len() - placed.len(),
            pairs.len()
        );
    }
    debug!("placed {} pairs", placed.len());
    (seated, placed)
}

/// Seats every student not yet flagged in `seated` into the remaining free
/// seats, exhausting one table before moving to the next.
///
/// Students are taken in `original_index` order (slice order among equal
/// indices), so the result does not depend on how the caller ordered them.
/// Students beyond capacity stay unseated; the count is returned.
pub fn fill_leftovers(tables: &mut [Table], students: &[Student], seated: &mut [bool]) -> usize {
    let mut order: Vec<usize> = (0..students.len()).collect();
    order.sort_by_key(|&i| students[i].original_index);

    let mut cursor = 0usize;
    let mut unseated = 0usize;

    for index in order {
        if seated[index] {
            continue;
        }
        while cursor < tables.len() && tables[cursor].free_seats() == 0 {
            cursor += 1;
        }
        match tables.get_mut(cursor) {
            Some(table) => {
                if table.seat(students[index].clone()).is_ok() {
                    seated[index] = true;
                }
            }
            None => unseated += 1,
        }
    }

    if unseated > 0 {
        warn!(
            "{} students left unseated: classroom holds fewer seats than students",
            unseated
        );
    }
    unseated
}

/// Recomputes table scores and drops tables nobody sits at.
pub fn finish_tables(tables: Vec<Table>) -> Vec<Table> {
    tables
        .into_iter()
        .filter(|t| !t.is_empty())
        .map(|mut t| {
            t.refresh_scores();
            t
        })
        .collect()
}
