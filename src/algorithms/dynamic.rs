//! Dynamic programming over a start-sorted task list.
//!
//! `best[i]` is the highest benefit of any schedule whose last task is `i`.
//! Each state keeps a single predecessor index; the winning chain is rebuilt
//! by walking predecessors once at the end. O(n²) predecessor scan.

use qtty::Unit;
use tracing::debug;

use super::{validate, Solution, Solver, SolverError};
use crate::task::Task;

/// Exact solver, quadratic in the number of tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicProgramming;

impl<U: Unit> Solver<U> for DynamicProgramming {
    fn name(&self) -> &'static str {
        "dynamic_prog"
    }

    fn solve(&mut self, tasks: &[Task<U>]) -> Result<Solution<U>, SolverError> {
        dynamic_prog(tasks)
    }
}

/// Solves `tasks` exactly. The list must be sorted by start time.
pub fn dynamic_prog<U: Unit>(tasks: &[Task<U>]) -> Result<Solution<U>, SolverError> {
    validate(tasks)?;

    let n = tasks.len();
    let mut best = vec![0.0_f64; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];

    for i in 0..n {
        for j in 0..i {
            if tasks[j].interval().precedes(&tasks[i].interval()) && best[j] > best[i] {
                best[i] = best[j];
                parent[i] = Some(j);
            }
        }
        best[i] += tasks[i].benefit();
    }

    let Some(last) = first_max(&best) else {
        return Ok(Solution::empty());
    };

    let mut chain = Vec::new();
    let mut cursor = Some(last);
    while let Some(i) = cursor {
        chain.push(tasks[i]);
        cursor = parent[i];
    }
    chain.reverse();

    debug!(tasks = n, last, best = best[last], "dynamic programming finished");

    Ok(Solution::from_tasks(chain))
}

/// Index of the first maximum of `values`.
fn first_max(values: &[f64]) -> Option<usize> {
    let mut iter = values.iter().enumerate();
    let (mut arg, mut max) = iter.next()?;
    for (i, v) in iter {
        if v > max {
            arg = i;
            max = v;
        }
    }
    Some(arg)
}
