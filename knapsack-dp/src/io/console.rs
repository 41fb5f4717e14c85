use itertools::Itertools;
use ndarray::ArrayView1;

use crate::entities::{DPState, DPTable};

/// Label printed in front of the optimal value of the rolling array solver
pub const OPTIMIZED_VALUE_LABEL: &str = "Maximum value in knapsack =";

/// Minimum width every table cell is right-aligned to
pub const TABLE_CELL_WIDTH: usize = 3;

/// Renders one table row: cells right-aligned to [`TABLE_CELL_WIDTH`] and joined with `|`.
pub fn format_table_row(row: ArrayView1<'_, u64>) -> String {
    row.iter()
        .map(|cell| format!("{cell:>width$}", width = TABLE_CELL_WIDTH))
        .join("|")
}

/// One line per table row, followed by a line holding the row length (`W + 1`).
pub fn table_lines(table: &DPTable) -> Vec<String> {
    table
        .rows()
        .map(format_table_row)
        .chain(std::iter::once(table.n_cols().to_string()))
        .collect()
}

/// Renders the rolling array as a bracketed, comma separated sequence, e.g. `[0, 0, 60]`.
pub fn format_array(array: &[u64]) -> String {
    format!("[{}]", array.iter().join(", "))
}

pub fn format_labelled_value(value: u64) -> String {
    format!("{OPTIMIZED_VALUE_LABEL} {value}")
}

/// Diagnostic lines describing the final state of a solver.
pub fn state_lines(state: DPState<'_>) -> Vec<String> {
    match state {
        DPState::Table(table) => table_lines(table),
        DPState::Array(array) => vec![format_array(array)],
    }
}
