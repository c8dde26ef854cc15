//! Conflict detection shared by every solver.
//!
//! Both checks use half-open semantics: a task ending exactly when another
//! starts is schedulable alongside it.

use qtty::Unit;

use crate::task::Task;

/// Returns true if any adjacent pair of `sorted` overlaps.
///
/// `sorted` must be ordered by start time; only neighbours are compared, so
/// the check is O(n). Accepts any iterator of task references, which lets
/// callers test a filtered view of a task list without collecting it.
pub fn has_conflict<'a, U, I>(sorted: I) -> bool
where
    U: Unit + 'a,
    I: IntoIterator<Item = &'a Task<U>>,
{
    let mut iter = sorted.into_iter();
    let Some(mut prev) = iter.next() else {
        return false;
    };
    for task in iter {
        if prev.end().value() > task.start().value() {
            return true;
        }
        prev = task;
    }
    false
}

/// Returns true if `candidate` overlaps no member of `schedule`.
///
/// `schedule` may be in any order; every member is compared. O(k).
pub fn is_compatible<U: Unit>(schedule: &[Task<U>], candidate: &Task<U>) -> bool {
    schedule.iter().all(|member| !member.overlaps(candidate))
}

/// Returns true if no two tasks of `tasks` overlap, whatever their order.
///
/// O(k²); used where subsets are not assumed sorted.
pub fn is_feasible<U: Unit>(tasks: &[Task<U>]) -> bool {
    tasks
        .iter()
        .enumerate()
        .all(|(i, a)| tasks[i + 1..].iter().all(|b| !a.overlaps(b)))
}
