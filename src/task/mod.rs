//! Task model: a time interval paired with the benefit of executing it.
//!
//! Every solver takes a *task list*, a slice of [`Task`]s sorted ascending by
//! start time. [`sort_by_start`] establishes that order for callers that build
//! lists by hand.

mod error;
mod interval;

pub use error::TaskError;
pub use interval::Interval;

use std::cmp::Ordering;
use std::fmt::Display;

use qtty::{Quantity, Unit};

/// Schedulable request occupying `[start, end)` and worth `benefit` if selected.
///
/// # Invariants
///
/// - `start < end`
/// - `benefit >= 0`
/// - all values are finite
///
/// The invariants are enforced by [`Task::new`]; a constructed task is
/// immutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Task<U: Unit> {
    interval: Interval<U>,
    benefit: f64,
}

impl<U: Unit> Task<U> {
    /// Creates a task, rejecting empty intervals and negative benefits.
    pub fn new(start: Quantity<U>, end: Quantity<U>, benefit: f64) -> Result<Self, TaskError> {
        let (s, e) = (start.value(), end.value());
        if !s.is_finite() || !e.is_finite() || !benefit.is_finite() {
            return Err(TaskError::NonFinite);
        }
        if s >= e {
            return Err(TaskError::EmptyInterval { start: s, end: e });
        }
        if benefit < 0.0 {
            return Err(TaskError::NegativeBenefit(benefit));
        }
        Ok(Self {
            interval: Interval::new(start, end),
            benefit,
        })
    }

    pub fn from_f64(start: f64, end: f64, benefit: f64) -> Result<Self, TaskError> {
        Self::new(Quantity::new(start), Quantity::new(end), benefit)
    }

    pub fn interval(&self) -> Interval<U> {
        self.interval
    }

    pub fn start(&self) -> Quantity<U> {
        self.interval.start()
    }

    pub fn end(&self) -> Quantity<U> {
        self.interval.end()
    }

    pub fn duration(&self) -> Quantity<U> {
        self.interval.duration()
    }

    pub fn benefit(&self) -> f64 {
        self.benefit
    }

    /// Returns true if both tasks claim a common instant.
    pub fn overlaps(&self, other: &Task<U>) -> bool {
        self.interval.overlaps(&other.interval)
    }

    /// Total order on `(start, end, benefit)`.
    pub fn cmp_by_start(&self, other: &Task<U>) -> Ordering {
        self.start()
            .value()
            .total_cmp(&other.start().value())
            .then_with(|| self.end().value().total_cmp(&other.end().value()))
            .then_with(|| self.benefit.total_cmp(&other.benefit))
    }
}

impl<U: Unit> Display for Task<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.start().value(),
            self.end().value(),
            self.benefit
        )
    }
}

/// Sorts tasks ascending by start time, breaking ties on end then benefit.
pub fn sort_by_start<U: Unit>(tasks: &mut [Task<U>]) {
    tasks.sort_by(Task::cmp_by_start);
}

/// Sum of benefits over `tasks`.
pub fn total_benefit<'a, U, I>(tasks: I) -> f64
where
    U: Unit + 'a,
    I: IntoIterator<Item = &'a Task<U>>,
{
    tasks.into_iter().map(Task::benefit).sum()
}

// =============================================================================
// Task Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Task<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Task", 3)?;
        s.serialize_field("start", &self.start().value())?;
        s.serialize_field("end", &self.end().value())?;
        s.serialize_field("benefit", &self.benefit)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for Task<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: f64,
            end: f64,
            benefit: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Task::from_f64(raw.start, raw.end, raw.benefit).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Second;

    fn t(start: f64, end: f64, benefit: f64) -> Task<Second> {
        Task::from_f64(start, end, benefit).unwrap()
    }

    #[test]
    fn test_task_accessors() {
        let task = t(1.0, 4.0, 30.0);
        assert_eq!(task.start().value(), 1.0);
        assert_eq!(task.end().value(), 4.0);
        assert_eq!(task.duration().value(), 3.0);
        assert_eq!(task.benefit(), 30.0);
        assert_eq!(task.interval(), Interval::from_f64(1.0, 4.0));
    }

    #[test]
    fn test_zero_benefit_is_valid() {
        assert!(Task::<Second>::from_f64(0.0, 1.0, 0.0).is_ok());
    }

    #[test]
    fn test_empty_interval_rejected() {
        assert_eq!(
            Task::<Second>::from_f64(5.0, 5.0, 1.0),
            Err(TaskError::EmptyInterval {
                start: 5.0,
                end: 5.0
            })
        );
        assert!(matches!(
            Task::<Second>::from_f64(6.0, 5.0, 1.0),
            Err(TaskError::EmptyInterval { .. })
        ));
    }

    #[test]
    fn test_negative_benefit_rejected() {
        assert_eq!(
            Task::<Second>::from_f64(0.0, 5.0, -2.0),
            Err(TaskError::NegativeBenefit(-2.0))
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            Task::<Second>::from_f64(f64::NAN, 5.0, 1.0),
            Err(TaskError::NonFinite)
        );
        assert_eq!(
            Task::<Second>::from_f64(0.0, f64::INFINITY, 1.0),
            Err(TaskError::NonFinite)
        );
        assert_eq!(
            Task::<Second>::from_f64(0.0, 1.0, f64::NAN),
            Err(TaskError::NonFinite)
        );
    }

    #[test]
    fn test_touching_tasks_do_not_overlap() {
        assert!(!t(0.0, 5.0, 10.0).overlaps(&t(5.0, 9.0, 20.0)));
        assert!(t(0.0, 6.0, 10.0).overlaps(&t(5.0, 9.0, 20.0)));
    }

    #[test]
    fn test_sort_by_start_breaks_ties() {
        let mut tasks = vec![
            t(5.0, 9.0, 50.0),
            t(0.0, 6.0, 60.0),
            t(5.0, 7.0, 30.0),
            t(5.0, 7.0, 10.0),
        ];
        sort_by_start(&mut tasks);
        assert_eq!(
            tasks,
            vec![
                t(0.0, 6.0, 60.0),
                t(5.0, 7.0, 10.0),
                t(5.0, 7.0, 30.0),
                t(5.0, 9.0, 50.0),
            ]
        );
    }

    #[test]
    fn test_total_benefit() {
        let tasks = [t(0.0, 1.0, 1.5), t(2.0, 3.0, 2.5)];
        assert_eq!(total_benefit(&tasks), 4.0);
        assert_eq!(total_benefit::<Second, _>(&[]), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(t(0.0, 6.0, 60.0).to_string(), "(0, 6, 60)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_revalidates() {
        let task = t(1.0, 4.0, 30.0);
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"start":1.0,"end":4.0,"benefit":30.0}"#);
        let back: Task<Second> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);

        let bad = serde_json::from_str::<Task<Second>>(r#"{"start":4.0,"end":1.0,"benefit":3.0}"#);
        assert!(bad.is_err());
    }
}
