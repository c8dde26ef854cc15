//! Random problem instances.

use qtty::Unit;
use rand::Rng;

use crate::task::{sort_by_start, Task, TaskError};

/// Bounds for randomly generated task lists.
///
/// All draws are integers from `1` up to the bound, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceConfig {
    /// Largest benefit a task can carry.
    pub max_benefit: u32,
    /// Latest start time.
    pub max_start_time: u32,
    /// Longest task duration.
    pub max_duration: u32,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            max_benefit: 99,
            max_start_time: 500,
            max_duration: 250,
        }
    }
}

impl InstanceConfig {
    /// Draws `n` tasks and returns them sorted by start time.
    ///
    /// Each task gets `start ∈ [1, max_start_time]`, `end = start + duration`
    /// with `duration ∈ [1, max_duration]`, and `benefit ∈ [1, max_benefit]`.
    /// Bounds of zero are treated as one.
    pub fn generate<U: Unit, R: Rng>(&self, n: usize, rng: &mut R) -> Result<Vec<Task<U>>, TaskError> {
        let mut tasks = (0..n)
            .map(|_| {
                let start = rng.gen_range(1..=self.max_start_time.max(1));
                let duration = rng.gen_range(1..=self.max_duration.max(1));
                let benefit = rng.gen_range(1..=self.max_benefit.max(1));
                Task::from_f64(
                    f64::from(start),
                    f64::from(start) + f64::from(duration),
                    f64::from(benefit),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        sort_by_start(&mut tasks);
        Ok(tasks)
    }
}
