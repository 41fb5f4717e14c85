use std::time::{Duration, Instant};

use log::info;
use thousands::Separable;

use crate::entities::{DPState, DPTable, Instance};
use crate::solvers::{DPSolution, Solver, SolverKind};
use crate::util::assertions;

/// Builds the full table of best values for every item-prefix and every budget.
///
/// Column 0 (budget `w = 0`) is filled like every other column, so an item of weight zero adds its value
/// even when `W = 0`. With strictly positive weights column 0 stays zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedSolver;

#[derive(Debug, Clone)]
pub struct TabulatedSolution {
    table: DPTable,
    value: u64,
    run_time: Duration,
}

impl TabulatedSolution {
    pub fn table(&self) -> &DPTable {
        &self.table
    }
}

impl Solver for TabulatedSolver {
    type Solution = TabulatedSolution;

    const KIND: SolverKind = SolverKind::Tabulated;

    fn solve(&self, instance: &Instance) -> TabulatedSolution {
        let start = Instant::now();
        let capacity = instance.capacity();
        let mut table = DPTable::new(instance.n_items(), capacity);

        // row i only reads row i - 1, rows are completed strictly in order
        for (i, (value, weight)) in (1..).zip(instance.items()) {
            // column 0 is included so that zero-weight items count at every budget
            for w in 0..=capacity {
                let without = table.get(i - 1, w);
                let best = match w.checked_sub(weight) {
                    None => without,
                    Some(remaining) => without.max(value + table.get(i - 1, remaining)),
                };
                table.set(i, w, best);
            }
        }

        debug_assert!(assertions::table_dimensions_match(&table, instance));
        debug_assert!(assertions::table_first_row_is_zero(&table));
        debug_assert!(assertions::table_is_monotone(&table));

        let value = table.final_value();
        debug_assert!(assertions::value_within_bounds(value, instance));

        let run_time = start.elapsed();
        info!(
            "[TAB] {} items, capacity {}: optimal value {} ({} cells, {:.3}ms)",
            instance.n_items().separate_with_commas(),
            capacity.separate_with_commas(),
            value.separate_with_commas(),
            table.n_cells().separate_with_commas(),
            run_time.as_secs_f64() * 1000.0
        );

        TabulatedSolution {
            table,
            value,
            run_time,
        }
    }
}

impl DPSolution for TabulatedSolution {
    fn kind(&self) -> SolverKind {
        SolverKind::Tabulated
    }

    fn value(&self) -> u64 {
        self.value
    }

    fn state(&self) -> DPState<'_> {
        DPState::Table(&self.table)
    }

    fn run_time(&self) -> Duration {
        self.run_time
    }

    fn result_line(&self) -> String {
        self.value.to_string()
    }
}
