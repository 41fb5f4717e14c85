use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::entities::{DPState, Instance};
use crate::error::KnapsackError;
use crate::io::console;

mod optimized;
mod tabulated;

#[doc(inline)]
pub use optimized::{OptimizedSolution, OptimizedSolver};

#[doc(inline)]
pub use tabulated::{TabulatedSolution, TabulatedSolver};

/// Identifies the two dynamic programming variants
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// Full `(n+1) x (W+1)` table
    Tabulated,
    /// Single rolling array of length `W+1`
    Optimized,
}

impl Display for SolverKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverKind::Tabulated => write!(f, "tabulated"),
            SolverKind::Optimized => write!(f, "optimized"),
        }
    }
}

/// A solver turns a validated [`Instance`] into a [`DPSolution`].
/// Solving cannot fail: every precondition is enforced when the instance is constructed.
pub trait Solver {
    type Solution: DPSolution;

    const KIND: SolverKind;

    fn solve(&self, instance: &Instance) -> Self::Solution;
}

/// Shared functionality of the solutions of both solvers.
pub trait DPSolution {
    fn kind(&self) -> SolverKind;

    /// The optimal value of the instance
    fn value(&self) -> u64;

    /// The dynamic programming state the solver finished with
    fn state(&self) -> DPState<'_>;

    fn run_time(&self) -> Duration;

    /// The line that reports the optimal value on the console
    fn result_line(&self) -> String;

    /// Lines describing the final dynamic programming state
    fn diagnostic_lines(&self) -> Vec<String> {
        console::state_lines(self.state())
    }

    /// Writes the diagnostic lines, newline terminated.
    fn write_diagnostics(&self, writer: &mut dyn Write) -> io::Result<()> {
        for line in self.diagnostic_lines() {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }

    /// Writes the diagnostic lines followed by the result line.
    fn write_console(&self, writer: &mut dyn Write) -> io::Result<()> {
        self.write_diagnostics(writer)?;
        writeln!(writer, "{}", self.result_line())
    }

    /// Emits the diagnostic lines through the `log` facade at debug level.
    fn log_diagnostics(&self) {
        for line in self.diagnostic_lines() {
            debug!("{line}");
        }
    }
}

/// Maximum value of the 0/1 knapsack defined by `values`, `weights` and `capacity`, computed with the full table.
/// The table is emitted at debug level through the `log` facade before it is dropped.
pub fn solve_tabulated(
    values: &[i64],
    weights: &[i64],
    capacity: i64,
) -> Result<u64, KnapsackError> {
    solve_with(&TabulatedSolver, values, weights, capacity)
}

/// Maximum value of the 0/1 knapsack defined by `values`, `weights` and `capacity`, computed with the rolling array.
/// The final array is emitted at debug level through the `log` facade before it is dropped.
pub fn solve_optimized(
    values: &[i64],
    weights: &[i64],
    capacity: i64,
) -> Result<u64, KnapsackError> {
    solve_with(&OptimizedSolver, values, weights, capacity)
}

fn solve_with<S: Solver>(
    solver: &S,
    values: &[i64],
    weights: &[i64],
    capacity: i64,
) -> Result<u64, KnapsackError> {
    let instance = Instance::new(values, weights, capacity)?;
    let solution = solver.solve(&instance);
    solution.log_diagnostics();
    Ok(solution.value())
}
