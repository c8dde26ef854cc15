//! ASCII bar chart of a task list.

use std::fmt::{self, Display};

use qtty::Unit;

use crate::task::Task;

/// Renders one line per task: its index, benefit, and a bar of dashes placed
/// along the time axis.
///
/// ```text
/// task  0 (b=60):------
/// task  1 (b=30): ---
/// ```
///
/// Each character stands for `scale` time units.
#[derive(Debug, Clone, Copy)]
pub struct TaskChart<'a, U: Unit> {
    tasks: &'a [Task<U>],
    scale: f64,
}

impl<'a, U: Unit> TaskChart<'a, U> {
    pub const DEFAULT_SCALE: f64 = 10.0;

    pub fn new(tasks: &'a [Task<U>]) -> Self {
        Self {
            tasks,
            scale: Self::DEFAULT_SCALE,
        }
    }

    /// Sets the number of time units per character. Non-positive values are ignored.
    pub fn with_scale(mut self, scale: f64) -> Self {
        if scale > 0.0 {
            self.scale = scale;
        }
        self
    }

    fn cells(&self, span: f64) -> usize {
        (span / self.scale).round_ties_even().max(0.0) as usize
    }
}

impl<U: Unit> Display for TaskChart<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, task) in self.tasks.iter().enumerate() {
            let offset = self.cells(task.start().value());
            let width = self.cells(task.duration().value());
            writeln!(
                f,
                "task {:2} (b={:2.0}):{}{}",
                i,
                task.benefit(),
                " ".repeat(offset),
                "-".repeat(width)
            )?;
        }
        Ok(())
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
    fn renders_bars_scaled() {
        let tasks = [t(0.0, 60.0, 60.0), t(10.0, 40.0, 5.0)];
        let chart = TaskChart::new(&tasks).to_string();
        assert_eq!(chart, "task  0 (b=60):------\ntask  1 (b= 5): ---\n");
    }

    #[test]
    fn custom_scale() {
        let tasks = [t(2.0, 4.0, 1.0)];
        let chart = TaskChart::new(&tasks).with_scale(1.0).to_string();
        assert_eq!(chart, "task  0 (b= 1):  --\n");
    }

    #[test]
    fn invalid_scale_is_ignored() {
        let tasks = [t(20.0, 40.0, 1.0)];
        let chart = TaskChart::new(&tasks).with_scale(0.0).to_string();
        assert_eq!(chart, "task  0 (b= 1):  --\n");
    }

    #[test]
    fn halves_round_to_even() {
        // 2.5 cells of offset round down to 2, 1.5 cells of width round up to 2.
        let tasks = [t(25.0, 40.0, 1.0)];
        let chart = TaskChart::new(&tasks).to_string();
        assert_eq!(chart, "task  0 (b= 1):  --\n");
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(TaskChart::<Second>::new(&[]).to_string(), "");
    }
}
