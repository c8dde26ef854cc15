//! Exhaustive search over every subset of the task list.
//!
//! Subsets are enumerated by increasing size, each size in lexicographic
//! index order. The first subset reaching the maximum benefit wins, so the
//! empty schedule is kept unless some subset beats a benefit of zero.

use qtty::Unit;
use tracing::debug;

use super::{validate, Solution, Solver, SolverError};
use crate::task::Task;

/// Exact solver, exponential in the number of tasks.
///
/// Intended as a correctness oracle for small instances. Lists longer than
/// `max_tasks` are rejected with [`SolverError::TooLarge`] instead of
/// enumerating `2^n` subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BruteForce {
    max_tasks: usize,
}

impl BruteForce {
    pub const DEFAULT_MAX_TASKS: usize = 25;

    /// Creates a brute force solver accepting at most `max_tasks` tasks.
    pub fn with_limit(max_tasks: usize) -> Self {
        Self { max_tasks }
    }

    pub fn max_tasks(&self) -> usize {
        self.max_tasks
    }
}

impl Default for BruteForce {
    fn default() -> Self {
        Self::with_limit(Self::DEFAULT_MAX_TASKS)
    }
}

impl<U: Unit> Solver<U> for BruteForce {
    fn name(&self) -> &'static str {
        "brute_force"
    }

    fn solve(&mut self, tasks: &[Task<U>]) -> Result<Solution<U>, SolverError> {
        validate(tasks)?;
        if tasks.len() > self.max_tasks {
            return Err(SolverError::TooLarge {
                len: tasks.len(),
                limit: self.max_tasks,
            });
        }
        Ok(search(tasks))
    }
}

/// Solves `tasks` exhaustively with the default size limit.
pub fn brute_force<U: Unit>(tasks: &[Task<U>]) -> Result<Solution<U>, SolverError> {
    BruteForce::default().solve(tasks)
}

fn search<U: Unit>(tasks: &[Task<U>]) -> Solution<U> {
    let n = tasks.len();
    let mut best: Vec<usize> = Vec::new();
    let mut best_benefit = 0.0;
    let mut visited: u64 = 1;
    let mut feasible: u64 = 1;

    let mut combo: Vec<usize> = Vec::with_capacity(n);
    for size in 1..=n {
        combo.clear();
        combo.extend(0..size);
        loop {
            visited += 1;
            if is_pairwise_free(tasks, &combo) {
                feasible += 1;
                let benefit: f64 = combo.iter().map(|&i| tasks[i].benefit()).sum();
                if benefit > best_benefit {
                    best_benefit = benefit;
                    best.clone_from(&combo);
                }
            }
            if !next_combination(&mut combo, n) {
                break;
            }
        }
    }

    debug!(
        tasks = n,
        visited, feasible, best_benefit, "brute force enumeration finished"
    );

    Solution::from_tasks(best.iter().map(|&i| tasks[i]).collect())
}

/// Checks every pair of the subset, independent of order.
fn is_pairwise_free<U: Unit>(tasks: &[Task<U>], combo: &[usize]) -> bool {
    combo.iter().enumerate().all(|(pos, &a)| {
        combo[pos + 1..]
            .iter()
            .all(|&b| !tasks[a].overlaps(&tasks[b]))
    })
}

/// Advances `combo` to the next k-combination of `0..n` in lexicographic order.
///
/// Returns false once `combo` is the last combination.
fn next_combination(combo: &mut [usize], n: usize) -> bool {
    let k = combo.len();
    let Some(i) = (0..k).rev().find(|&i| combo[i] < n - k + i) else {
        return false;
    };
    combo[i] += 1;
    for j in i + 1..k {
        combo[j] = combo[j - 1] + 1;
    }
    true
}
