//! Randomized local search producing a maximal schedule.
//!
//! Starting from nothing, each round collects every excluded task that could
//! join the current selection without a conflict and includes one of them,
//! drawn uniformly. The search stops when no task can be added, so the result
//! is maximal but usually not of maximum benefit.
//!
//! The injected RNG is the only source of nondeterminism: two runs seeded
//! identically return identical solutions.

use qtty::Unit;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::{validate, Solution, Solver, SolverError};
use crate::conflict::has_conflict;
use crate::task::Task;

/// Stochastic solver owning its random number generator.
#[derive(Debug, Clone)]
pub struct RandomSearch<R = StdRng> {
    rng: R,
}

impl RandomSearch<StdRng> {
    /// Creates a solver with a reproducible RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a solver seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSearch<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<U: Unit, R: Rng> Solver<U> for RandomSearch<R> {
    fn name(&self) -> &'static str {
        "random_search"
    }

    fn solve(&mut self, tasks: &[Task<U>]) -> Result<Solution<U>, SolverError> {
        random_search(tasks, &mut self.rng)
    }
}

/// Builds a maximal schedule by random insertion. The list must be sorted by start time.
pub fn random_search<U: Unit, R: Rng>(
    tasks: &[Task<U>],
    rng: &mut R,
) -> Result<Solution<U>, SolverError> {
    validate(tasks)?;

    let mut included = vec![false; tasks.len()];
    let mut rounds = 0usize;

    loop {
        let addable: Vec<usize> = (0..tasks.len())
            .filter(|&i| !included[i] && !has_conflict(with_tentative(tasks, &included, i)))
            .collect();

        if addable.is_empty() {
            break;
        }

        let pick = addable[rng.gen_range(0..addable.len())];
        trace!(round = rounds, addable = addable.len(), pick, "random search step");
        included[pick] = true;
        rounds += 1;
    }

    debug!(tasks = tasks.len(), rounds, "random search reached a maximal schedule");

    let schedule = tasks
        .iter()
        .zip(&included)
        .filter(|(_, inc)| **inc)
        .map(|(task, _)| *task)
        .collect();
    Ok(Solution::from_tasks(schedule))
}

/// Included tasks plus `extra`, in list order.
fn with_tentative<'a, U: Unit + 'a>(
    tasks: &'a [Task<U>],
    included: &'a [bool],
    extra: usize,
) -> impl Iterator<Item = &'a Task<U>> + 'a {
    tasks
        .iter()
        .enumerate()
        .filter(move |(i, _)| included[*i] || *i == extra)
        .map(|(_, task)| task)
}
