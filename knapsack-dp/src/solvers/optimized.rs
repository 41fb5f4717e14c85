use std::time::{Duration, Instant};

use log::info;
use thousands::Separable;

use crate::entities::{DPState, Instance};
use crate::io::console;
use crate::solvers::{DPSolution, Solver, SolverKind};
use crate::util::assertions;

/// Computes the optimal value with a single array of length `W + 1`, updated in place once per item.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizedSolver;

#[derive(Debug, Clone)]
pub struct OptimizedSolution {
    array: Vec<u64>,
    value: u64,
    run_time: Duration,
}

impl OptimizedSolution {
    pub fn array(&self) -> &[u64] {
        &self.array
    }
}

impl Solver for OptimizedSolver {
    type Solution = OptimizedSolution;

    const KIND: SolverKind = SolverKind::Optimized;

    fn solve(&self, instance: &Instance) -> OptimizedSolution {
        let start = Instant::now();
        let capacity = instance.capacity();
        let mut array = vec![0u64; capacity + 1];

        for (value, weight) in instance.items() {
            // Capacities must be visited in descending order: array[w - weight] has to still hold the
            // best value *without* the current item. Ascending order would let the item be packed again
            // on top of itself, solving the unbounded knapsack instead.
            // Budgets below `weight` cannot hold the item and keep their value.
            for w in (weight..=capacity).rev() {
                array[w] = array[w].max(value + array[w - weight]);
            }
            debug_assert!(assertions::array_is_monotone(&array));
        }

        let value = array[capacity];
        debug_assert!(assertions::value_within_bounds(value, instance));

        let run_time = start.elapsed();
        info!(
            "[OPT] {} items, capacity {}: optimal value {} ({} cells, {:.3}ms)",
            instance.n_items().separate_with_commas(),
            capacity.separate_with_commas(),
            value.separate_with_commas(),
            array.len().separate_with_commas(),
            run_time.as_secs_f64() * 1000.0
        );

        OptimizedSolution {
            array,
            value,
            run_time,
        }
    }
}

impl DPSolution for OptimizedSolution {
    fn kind(&self) -> SolverKind {
        SolverKind::Optimized
    }

    fn value(&self) -> u64 {
        self.value
    }

    fn state(&self) -> DPState<'_> {
        DPState::Array(&self.array)
    }

    fn run_time(&self) -> Duration {
        self.run_time
    }

    fn result_line(&self) -> String {
        console::format_labelled_value(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::TabulatedSolver;

    fn instance(values: &[u64], weights: &[usize], capacity: usize) -> Instance {
        Instance::from_parts(values.to_vec(), weights.to_vec(), capacity).unwrap()
    }

    /// The same update with capacities visited in ascending order, which lets an item be reused.
    fn solve_ascending(instance: &Instance) -> Vec<u64> {
        let capacity = instance.capacity();
        let mut array = vec![0u64; capacity + 1];
        for (value, weight) in instance.items() {
            for w in weight..=capacity {
                array[w] = array[w].max(value + array[w - weight]);
            }
        }
        array
    }

    #[test]
    fn canonical_instance() {
        let solution = OptimizedSolver.solve(&instance(&[60, 100, 120], &[10, 20, 30], 50));
        assert_eq!(solution.value(), 220);
        assert_eq!(solution.array().len(), 51);
        assert_eq!(solution.array()[10], 60);
        assert_eq!(solution.array()[30], 160);
    }

    #[test]
    fn single_item_is_used_at_most_once() {
        let instance = instance(&[10], &[5], 10);
        let solution = OptimizedSolver.solve(&instance);
        assert_eq!(solution.value(), 10);
        assert_eq!(solve_ascending(&instance)[10], 20);
    }

    #[test]
    fn ascending_order_overcounts_canonical_instance() {
        let instance = instance(&[60, 100, 120], &[10, 20, 30], 50);
        let descending = OptimizedSolver.solve(&instance).value();
        let ascending = solve_ascending(&instance)[50];
        assert_eq!(descending, 220);
        // five copies of the first item
        assert_eq!(ascending, 300);
        assert!(ascending > descending);
    }

    #[test]
    fn budgets_below_weight_are_untouched() {
        let solution = OptimizedSolver.solve(&instance(&[7, 9], &[3, 4], 5));
        assert_eq!(solution.array(), &[0, 0, 0, 7, 9, 9]);
    }

    #[test]
    fn array_equals_last_table_row() {
        let instance = instance(&[5, 10, 3, 8, 2], &[0, 3, 2, 4, 1], 9);
        let array = OptimizedSolver.solve(&instance);
        let table = TabulatedSolver.solve(&instance);
        assert!(assertions::array_matches_table(array.array(), table.table()));
        assert_eq!(array.value(), table.value());
    }

    #[test]
    fn diagnostics_of_small_instance() {
        let solution = OptimizedSolver.solve(&instance(&[10, 20], &[1, 2], 3));
        assert_eq!(solution.diagnostic_lines(), vec!["[0, 10, 20, 30]".to_string()]);
        assert_eq!(solution.result_line(), "Maximum value in knapsack = 30");
    }
}
