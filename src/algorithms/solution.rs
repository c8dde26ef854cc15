//! Solver output: the selected tasks and their summed benefit.

use qtty::Unit;

use crate::conflict::is_feasible;
use crate::task::{total_benefit, Task};

/// A schedule chosen by a solver together with its total benefit.
///
/// `total_benefit` always equals the sum of `benefit` over `schedule`; build
/// solutions through [`Solution::from_tasks`] to keep the two in step.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<U: Unit> {
    total_benefit: f64,
    schedule: Vec<Task<U>>,
}

impl<U: Unit> Solution<U> {
    /// The zero-benefit solution with nothing scheduled.
    pub fn empty() -> Self {
        Self {
            total_benefit: 0.0,
            schedule: Vec::new(),
        }
    }

    pub fn from_tasks(schedule: Vec<Task<U>>) -> Self {
        Self {
            total_benefit: total_benefit(&schedule),
            schedule,
        }
    }

    pub fn total_benefit(&self) -> f64 {
        self.total_benefit
    }

    /// Selected tasks, in the order the solver picked them.
    pub fn schedule(&self) -> &[Task<U>] {
        &self.schedule
    }

    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }

    /// Returns true if no two selected tasks overlap.
    pub fn is_feasible(&self) -> bool {
        is_feasible(&self.schedule)
    }

    /// Splits into the `(total_benefit, schedule)` pair.
    pub fn into_parts(self) -> (f64, Vec<Task<U>>) {
        (self.total_benefit, self.schedule)
    }
}

impl<U: Unit> Default for Solution<U> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Solution<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Solution", 2)?;
        s.serialize_field("total_benefit", &self.total_benefit)?;
        s.serialize_field("schedule", &self.schedule)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for Solution<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(bound = "")]
        struct Raw<V: Unit> {
            schedule: Vec<Task<V>>,
        }

        // total_benefit is derived, so it is recomputed rather than trusted.
        let raw = Raw::<U>::deserialize(deserializer)?;
        Ok(Solution::from_tasks(raw.schedule))
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
    fn empty_solution() {
        let s = Solution::<Second>::empty();
        assert_eq!(s.total_benefit(), 0.0);
        assert!(s.is_empty());
        assert!(s.is_feasible());
        assert_eq!(s, Solution::default());
    }

    #[test]
    fn from_tasks_sums_benefit() {
        let s = Solution::from_tasks(vec![t(1.0, 4.0, 30.0), t(5.0, 9.0, 50.0)]);
        assert_eq!(s.total_benefit(), 80.0);
        assert_eq!(s.len(), 2);
        assert!(s.is_feasible());
    }

    #[test]
    fn infeasible_schedule_is_reported() {
        let s = Solution::from_tasks(vec![t(0.0, 6.0, 60.0), t(5.0, 9.0, 50.0)]);
        assert!(!s.is_feasible());
    }

    #[test]
    fn into_parts() {
        let (benefit, schedule) = Solution::from_tasks(vec![t(0.0, 5.0, 10.0)]).into_parts();
        assert_eq!(benefit, 10.0);
        assert_eq!(schedule, vec![t(0.0, 5.0, 10.0)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_recomputes_total() {
        let json = r#"{"total_benefit":999.0,"schedule":[{"start":0.0,"end":5.0,"benefit":10.0}]}"#;
        let s: Solution<Second> = serde_json::from_str(json).unwrap();
        assert_eq!(s.total_benefit(), 10.0);
    }
}
