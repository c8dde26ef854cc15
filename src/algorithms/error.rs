use thiserror::Error;

use crate::task::TaskError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid input at task {index}: {source}")]
    InvalidInput {
        index: usize,
        #[source]
        source: TaskError,
    },

    #[error("Task list of {len} tasks exceeds the limit of {limit} for exhaustive search")]
    TooLarge { len: usize, limit: usize },
}
