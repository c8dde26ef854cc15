//! telesched - weighted interval scheduling for single-instrument observing plans
//!
//! Given tasks that each occupy a time interval and carry a benefit, select a
//! conflict-free subset with high total benefit. Four strategies are provided,
//! two exact and two heuristic, together with the conflict checks they share,
//! a random instance generator, an ASCII chart, and a timing harness.

pub mod algorithms;
pub mod benchmark;
pub mod chart;
pub mod conflict;
pub mod instance;
pub mod task;

pub use algorithms::{
    brute_force, dynamic_prog, greedy, random_search, Solution, Solver, SolverError,
};
pub use conflict::{has_conflict, is_compatible};
pub use task::{Interval, Task, TaskError};
