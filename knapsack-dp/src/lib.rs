//! Dynamic programming solvers for the 0/1 knapsack problem.
//!
//! Two independent solvers compute the same optimal value:
//! * [`TabulatedSolver`](solvers::TabulatedSolver) keeps the full `(n+1) x (W+1)` table.
//! * [`OptimizedSolver`](solvers::OptimizedSolver) keeps a single rolling array of length `W+1`.

/// Entities modelling a knapsack instance and the dynamic programming state
pub mod entities;

/// Errors raised while validating knapsack input
pub mod error;

/// Importing instances into and exporting solutions out of this library
pub mod io;

/// The dynamic programming solvers
pub mod solvers;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::KnapsackError;

#[doc(inline)]
pub use solvers::{solve_optimized, solve_tabulated};
