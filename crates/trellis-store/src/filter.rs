//! Derived views: filtering and sorting
//!
//! Both are non-destructive: they borrow from the tree and never mutate it.
//! An unset filter axis matches everything, the "all" option in the UI.

use std::cmp::Ordering;
use trellis_task::{Importance, Priority, Status, Task};

/// Top-level task filter
///
/// `None` on an axis matches every task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFilter {
    /// Priority axis, `None` for all
    pub priority: Option<Priority>,
    /// Importance axis, `None` for all
    pub importance: Option<Importance>,
    /// Status axis, `None` for all
    pub status: Option<Status>,
}

impl TaskFilter {
    /// Filter matching every task
    #[inline]
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// With priority axis
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// With importance axis
    #[inline]
    #[must_use]
    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = Some(importance);
        self
    }

    /// With status axis
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Check whether a task passes every set axis
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if self.priority.is_some_and(|p| task.priority != p) {
            return false;
        }
        if self.importance.is_some_and(|i| task.importance != Some(i)) {
            return false;
        }
        if self.status.is_some_and(|s| task.status != s) {
            return false;
        }
        true
    }
}

/// Field a task sequence can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Lexicographic title
    Title,
    /// Due date; tasks without one sort to the end ascending
    DueDate,
    /// Priority rank
    Priority,
    /// Status rank
    Status,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// Compare two tasks for the given field and direction
#[must_use]
pub fn compare(a: &Task, b: &Task, field: SortField, order: SortOrder) -> Ordering {
    let ascending = match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::DueDate => match (a.due_date, b.due_date) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(da), Some(db)) => da.cmp(&db),
        },
        SortField::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortField::Status => a.status.rank().cmp(&b.status.rank()),
    };
    match order {
        SortOrder::Asc => ascending,
        SortOrder::Desc => ascending.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use trellis_task::TaskDraft;

    fn task(title: &str, priority: Priority) -> Task {
        TaskDraft::new(title).with_priority(priority).into_task(None)
    }

    #[test]
    fn empty_filter_matches_everything() {
        let t = task("t", Priority::Low);
        assert!(TaskFilter::all().matches(&t));
    }

    #[test]
    fn priority_axis_filters() {
        let filter = TaskFilter::all().with_priority(Priority::High);
        assert!(filter.matches(&task("t", Priority::High)));
        assert!(!filter.matches(&task("t", Priority::Low)));
    }

    #[test]
    fn importance_axis_requires_matching_value() {
        let filter = TaskFilter::all().with_importance(Importance::High);
        let with = TaskDraft::new("t").into_task(Some(Importance::High));
        let without = TaskDraft::new("t").into_task(None);

        assert!(filter.matches(&with));
        assert!(!filter.matches(&without));
    }

    #[test]
    fn axes_combine_conjunctively() {
        let filter = TaskFilter::all()
            .with_priority(Priority::High)
            .with_status(Status::Done);
        let t = task("t", Priority::High);
        assert!(!filter.matches(&t)); // status is still todo
    }

    #[test]
    fn due_date_sorts_missing_last_ascending() {
        let dated = TaskDraft::new("dated")
            .with_due_date(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
            .into_task(None);
        let undated = TaskDraft::new("undated").into_task(None);

        assert_eq!(
            compare(&undated, &dated, SortField::DueDate, SortOrder::Asc),
            Ordering::Greater
        );
        assert_eq!(
            compare(&undated, &dated, SortField::DueDate, SortOrder::Desc),
            Ordering::Less
        );
    }

    #[test]
    fn priority_descending_puts_high_first() {
        let high = task("h", Priority::High);
        let low = task("l", Priority::Low);
        assert_eq!(
            compare(&high, &low, SortField::Priority, SortOrder::Desc),
            Ordering::Less
        );
    }

    #[test]
    fn title_sort_is_lexicographic() {
        let a = task("alpha", Priority::Medium);
        let b = task("beta", Priority::Medium);
        assert_eq!(
            compare(&a, &b, SortField::Title, SortOrder::Asc),
            Ordering::Less
        );
    }
}
