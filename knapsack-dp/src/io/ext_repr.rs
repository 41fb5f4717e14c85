use serde::{Deserialize, Serialize};

use crate::solvers::SolverKind;

/// External representation of an [`Instance`](crate::entities::Instance).
/// All numbers are signed so that invalid input can be represented and reported during import.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtInstance {
    /// Optional name of the instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Value of every item
    pub values: Vec<i64>,
    /// Weight of every item, index-aligned with `values`
    pub weights: Vec<i64>,
    /// Total weight budget
    pub capacity: i64,
}

/// External representation of a solution produced by one of the solvers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    /// The solver that produced the solution
    pub solver: SolverKind,
    /// Optimal value of the instance
    pub value: u64,
    /// Time spent solving, in milliseconds
    pub run_time_ms: f64,
    /// The final dynamic programming state, only present if requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ExtDPState>,
}

/// Dynamic programming state in which a solver finished
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtDPState {
    /// All rows of the table, row `i` uses the first `i` items
    Table(Vec<Vec<u64>>),
    /// The rolling array after all items were processed
    Array(Vec<u64>),
}
