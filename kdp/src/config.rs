use serde::{Deserialize, Serialize};

use crate::io::cli::SolverVariant;

/// Configuration for the kdp driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct KdpConfig {
    /// Which solver(s) to run, can be overridden with `--solver`
    pub solver: SolverVariant,
    /// Print the dynamic programming state to stdout before the result line
    pub print_diagnostics: bool,
    /// Embed the final table or array in the JSON solution
    pub include_state_in_solution: bool,
    /// When both solvers run, fail if their optimal values differ
    pub verify_equivalence: bool,
}

impl Default for KdpConfig {
    fn default() -> Self {
        Self {
            solver: SolverVariant::Both,
            print_diagnostics: true,
            include_state_in_solution: false,
            verify_equivalence: true,
        }
    }
}
