//! Timing harness running solvers over a task list.

use std::fmt::{self, Display};
use std::time::{Duration, Instant};

use qtty::Unit;
use tracing::{info, warn};

use crate::algorithms::{Solution, Solver, SolverError};
use crate::task::Task;

/// Outcome of one timed solver run.
#[derive(Debug, Clone)]
pub struct RunReport<U: Unit> {
    pub solver: &'static str,
    pub elapsed: Duration,
    pub solution: Solution<U>,
}

impl<U: Unit> Display for RunReport<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "testing {:<14} ... done ! It took {:.2} seconds",
            self.solver,
            self.elapsed.as_secs_f64()
        )?;
        write!(f, "Solution with benefit = {}", self.solution.total_benefit())
    }
}

/// Solves `tasks` once with `solver`, measuring wall-clock time.
pub fn run<U: Unit>(
    solver: &mut dyn Solver<U>,
    tasks: &[Task<U>],
) -> Result<RunReport<U>, SolverError> {
    let started = Instant::now();
    let solution = solver.solve(tasks)?;
    let elapsed = started.elapsed();

    info!(
        solver = solver.name(),
        tasks = tasks.len(),
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        benefit = solution.total_benefit(),
        "solver finished"
    );

    Ok(RunReport {
        solver: solver.name(),
        elapsed,
        solution,
    })
}

/// Runs every solver in turn. A failing solver does not stop the others.
pub fn run_all<U: Unit>(
    solvers: &mut [Box<dyn Solver<U>>],
    tasks: &[Task<U>],
) -> Vec<(&'static str, Result<RunReport<U>, SolverError>)> {
    solvers
        .iter_mut()
        .map(|solver| {
            let name = solver.name();
            let outcome = run(solver.as_mut(), tasks);
            if let Err(err) = &outcome {
                warn!(solver = name, %err, "solver failed");
            }
            (name, outcome)
        })
        .collect()
}
