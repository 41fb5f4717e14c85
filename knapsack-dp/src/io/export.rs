use crate::entities::DPState;
use crate::io::ext_repr::{ExtDPState, ExtSolution};
use crate::solvers::DPSolution;

/// Exports a solution of either solver, optionally including its final dynamic programming state.
pub fn export_solution<S: DPSolution + ?Sized>(solution: &S, include_state: bool) -> ExtSolution {
    ExtSolution {
        solver: solution.kind(),
        value: solution.value(),
        run_time_ms: solution.run_time().as_secs_f64() * 1000.0,
        state: include_state.then(|| export_state(solution.state())),
    }
}

pub fn export_state(state: DPState<'_>) -> ExtDPState {
    match state {
        DPState::Table(table) => ExtDPState::Table(table.to_rows()),
        DPState::Array(array) => ExtDPState::Array(array.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Instance;
    use crate::solvers::{OptimizedSolver, SolverKind, Solver, TabulatedSolver};

    #[test]
    fn export_with_and_without_state() {
        let instance = Instance::from_parts(vec![10, 20], vec![1, 2], 3).unwrap();

        let tab = export_solution(&TabulatedSolver.solve(&instance), true);
        assert_eq!(tab.solver, SolverKind::Tabulated);
        assert_eq!(tab.value, 30);
        assert_eq!(
            tab.state,
            Some(ExtDPState::Table(vec![
                vec![0, 0, 0, 0],
                vec![0, 10, 10, 10],
                vec![0, 10, 20, 30]
            ]))
        );

        let opt = export_solution(&OptimizedSolver.solve(&instance), false);
        assert_eq!(opt.solver, SolverKind::Optimized);
        assert_eq!(opt.value, 30);
        assert_eq!(opt.state, None);
    }

    #[test]
    fn exported_solution_serializes_state_tagged() {
        let instance = Instance::from_parts(vec![10], vec![1], 1).unwrap();
        let ext = export_solution(&OptimizedSolver.solve(&instance), true);
        let json = serde_json::to_value(&ext).unwrap();
        assert_eq!(json["solver"], "optimized");
        assert_eq!(json["state"]["type"], "array");
        assert_eq!(json["state"]["data"], serde_json::json!([0, 10]));
    }
}
