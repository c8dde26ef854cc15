use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TaskError {
    #[error("Task interval is empty: start {start} must be strictly before end {end}")]
    EmptyInterval { start: f64, end: f64 },

    #[error("Task benefit cannot be negative: {0}")]
    NegativeBenefit(f64),

    #[error("Task values must be finite")]
    NonFinite,

    #[error("Task list is not sorted by start time: start {start} follows start {previous}")]
    Unsorted { previous: f64, start: f64 },
}
