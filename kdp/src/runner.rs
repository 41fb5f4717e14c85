use std::io::Write;

use anyhow::{Context, Result, ensure};
use knapsack_dp::entities::Instance;
use knapsack_dp::io::export::export_solution;
use knapsack_dp::io::ext_repr::ExtSolution;
use knapsack_dp::solvers::{DPSolution, OptimizedSolver, Solver, TabulatedSolver};
use log::info;

use crate::config::KdpConfig;

/// Runs the solver(s) selected in `config` on `instance`.
/// For every solver the console output (diagnostics if enabled, then the result line) is written to `console`.
pub fn solve_instance(
    instance: &Instance,
    config: &KdpConfig,
    console: &mut dyn Write,
) -> Result<Vec<ExtSolution>> {
    let mut solutions = vec![];
    if config.solver.runs_tabulated() {
        solutions.push(run(&TabulatedSolver, instance, config, console)?);
    }
    if config.solver.runs_optimized() {
        solutions.push(run(&OptimizedSolver, instance, config, console)?);
    }

    if config.verify_equivalence && solutions.len() == 2 {
        let (tab, opt) = (&solutions[0], &solutions[1]);
        ensure!(
            tab.value == opt.value,
            "solvers disagree: {} found {}, {} found {}",
            tab.solver,
            tab.value,
            opt.solver,
            opt.value
        );
        info!("[RUN] both solvers agree on optimal value {}", tab.value);
    }

    Ok(solutions)
}

fn run<S: Solver>(
    solver: &S,
    instance: &Instance,
    config: &KdpConfig,
    console: &mut dyn Write,
) -> Result<ExtSolution> {
    info!("[RUN] running {} solver", S::KIND);
    let solution = solver.solve(instance);

    if config.print_diagnostics {
        solution
            .write_diagnostics(console)
            .context("could not write diagnostics")?;
    } else {
        solution.log_diagnostics();
    }
    writeln!(console, "{}", solution.result_line()).context("could not write result")?;

    Ok(export_solution(
        &solution,
        config.include_state_in_solution,
    ))
}
