//! Solving strategies for weighted interval scheduling.
//!
//! | Solver | Exact | Complexity |
//! |--------|-------|------------|
//! | [`BruteForce`] | yes | O(2ⁿ · n²) |
//! | [`DynamicProgramming`] | yes | O(n²) |
//! | [`Greedy`] | no | O(n²) |
//! | [`RandomSearch`] | no (maximal) | O(n³) |
//!
//! Every solver expects a task list sorted by start time and rejects anything
//! else with [`SolverError::InvalidInput`] before doing any work.

pub mod brute_force;
pub mod dynamic;
mod error;
pub mod greedy;
pub mod random_search;
mod solution;

pub use brute_force::{brute_force, BruteForce};
pub use dynamic::{dynamic_prog, DynamicProgramming};
pub use error::SolverError;
pub use greedy::{greedy, Greedy};
pub use random_search::{random_search, RandomSearch};
pub use solution::Solution;

use crate::task::{Task, TaskError};
use qtty::Unit;

/// Strategy selecting a conflict-free, high-benefit subset of a task list.
///
/// # Type Parameters
///
/// * `U` - Unit of time measurement (e.g., [`qtty::Second`])
pub trait Solver<U: Unit> {
    /// Short identifier used in reports.
    fn name(&self) -> &'static str;

    /// Solves one problem instance.
    ///
    /// # Arguments
    ///
    /// * `tasks` - Task list sorted ascending by start time
    ///
    /// # Returns
    ///
    /// The selected schedule and its total benefit. An empty list yields
    /// [`Solution::empty`].
    fn solve(&mut self, tasks: &[Task<U>]) -> Result<Solution<U>, SolverError>;
}

/// Checks that `tasks` is sorted ascending by start time.
///
/// Task invariants (`start < end`, non-negative finite benefit) are already
/// guaranteed by [`Task::new`].
pub fn validate<U: Unit>(tasks: &[Task<U>]) -> Result<(), SolverError> {
    for (index, pair) in tasks.windows(2).enumerate() {
        let previous = pair[0].start().value();
        let start = pair[1].start().value();
        if start < previous {
            return Err(SolverError::InvalidInput {
                index: index + 1,
                source: TaskError::Unsorted { previous, start },
            });
        }
    }
    Ok(())
}

/// All four solvers, in benchmark order.
///
/// `seed` feeds the random search so that runs can be replayed.
pub fn default_solvers<U: Unit>(seed: u64) -> Vec<Box<dyn Solver<U>>> {
    vec![
        Box::new(RandomSearch::new(seed)),
        Box::new(BruteForce::default()),
        Box::new(Greedy),
        Box::new(DynamicProgramming),
    ]
}
