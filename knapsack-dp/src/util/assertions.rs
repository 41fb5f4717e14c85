use crate::entities::{DPState, DPTable, Instance};
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the dynamic programming state
//Used in debug_assert!() blocks

pub fn value_sum_fits(values: &[u64]) -> bool {
    values
        .iter()
        .try_fold(0u64, |acc, &v| acc.checked_add(v))
        .is_some()
}

/// The full `(n_items + 1) x (capacity + 1)` table must be addressable as a single allocation of `u64`s.
pub fn table_fits(n_items: usize, capacity: usize) -> bool {
    let max_cells = isize::MAX as usize / size_of::<u64>();
    capacity
        .checked_add(1)
        .and_then(|n_cols| n_items.checked_add(1)?.checked_mul(n_cols))
        .is_some_and(|n_cells| n_cells <= max_cells)
}

pub fn table_dimensions_match(table: &DPTable, instance: &Instance) -> bool {
    table.n_rows() == instance.n_items() + 1 && table.n_cols() == instance.capacity() + 1
}

/// Row 0 describes the empty item set, nothing can be gained without items.
pub fn table_first_row_is_zero(table: &DPTable) -> bool {
    table.row(0).iter().all(|&c| c == 0)
}

/// Cells never decrease when the budget grows (along a row) or when an item becomes available (along a column).
pub fn table_is_monotone(table: &DPTable) -> bool {
    let rows_ok = table
        .rows()
        .all(|r| r.iter().tuple_windows().all(|(a, b)| a <= b));
    let cols_ok = table
        .columns()
        .all(|c| c.iter().tuple_windows().all(|(a, b)| a <= b));
    if !(rows_ok && cols_ok) {
        error!("dp table not monotone (rows: {rows_ok}, columns: {cols_ok})");
    }
    rows_ok && cols_ok
}

pub fn array_is_monotone(array: &[u64]) -> bool {
    array.iter().tuple_windows().all(|(a, b)| a <= b)
}

/// The rolling array after all items must equal the last row of the full table.
pub fn array_matches_table(array: &[u64], table: &DPTable) -> bool {
    DPState::Table(table).final_row() == array
}

pub fn value_within_bounds(value: u64, instance: &Instance) -> bool {
    value <= instance.total_value()
}
