//! Benefit-ordered greedy heuristic.
//!
//! Tasks are visited from highest to lowest benefit and kept whenever they fit
//! beside everything kept so far. Ordering by benefit rather than end time
//! makes the result suboptimal on some inputs; it exists as a fast baseline.

use qtty::Unit;
use tracing::{debug, trace};

use super::{validate, Solution, Solver, SolverError};
use crate::conflict::is_compatible;
use crate::task::Task;

/// Heuristic solver, O(n²). Never backtracks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl<U: Unit> Solver<U> for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&mut self, tasks: &[Task<U>]) -> Result<Solution<U>, SolverError> {
        greedy(tasks)
    }
}

/// Picks tasks by descending benefit. Equal benefits are visited in reverse
/// input order.
///
/// The schedule is returned in acceptance order.
pub fn greedy<U: Unit>(tasks: &[Task<U>]) -> Result<Solution<U>, SolverError> {
    validate(tasks)?;

    let mut order: Vec<&Task<U>> = tasks.iter().collect();
    order.sort_by(|a, b| a.benefit().total_cmp(&b.benefit()));
    order.reverse();

    let mut order = order.into_iter();
    let Some(&seed) = order.next() else {
        return Ok(Solution::empty());
    };

    let mut schedule = vec![seed];
    for task in order {
        if is_compatible(&schedule, task) {
            trace!(%task, "greedy accepted task");
            schedule.push(*task);
        }
    }

    debug!(
        tasks = tasks.len(),
        selected = schedule.len(),
        "greedy selection finished"
    );

    Ok(Solution::from_tasks(schedule))
}
