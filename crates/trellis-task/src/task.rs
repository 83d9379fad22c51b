//! The task entity and its recursive tree
//!
//! A task owns its subtasks outright: the structure is a strict tree with no
//! shared ownership and no cycles. All lookups are depth-first pre-order.

use crate::fields::{Importance, Priority, Status};
use crate::id::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task node
///
/// # Invariants
/// - `id` is unique within the owning project's tree
/// - `subtasks` form a strict tree (each node has exactly one parent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable identifier, assigned at creation
    pub id: TaskId,
    /// Display title
    pub title: String,
    /// Longer free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Due date, or null for none
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Priority axis
    #[serde(default)]
    pub priority: Priority,
    /// Importance axis; absent on single-axis stores
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,
    /// Workflow status
    #[serde(default)]
    pub status: Status,
    /// Assigned person, free-form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Labels for board cards
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Last edit timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    /// Ordered child tasks, recursively the same shape
    #[serde(default)]
    pub subtasks: Vec<Task>,
}

impl Task {
    /// Create new leaf task
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: None,
            due_date: None,
            priority: Priority::default(),
            importance: None,
            status: Status::default(),
            assignee: None,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            subtasks: Vec::new(),
        }
    }

    /// With priority
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// With importance
    #[inline]
    #[must_use]
    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = Some(importance);
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// With due date
    #[inline]
    #[must_use]
    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With a subtask appended
    #[inline]
    #[must_use]
    pub fn with_subtask(mut self, subtask: Task) -> Self {
        self.subtasks.push(subtask);
        self
    }

    /// Mark the task as edited now
    #[inline]
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Find a task by id in this subtree (depth-first pre-order)
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        if self.id == id {
            return Some(self);
        }
        find_in(&self.subtasks, id)
    }

    /// Mutable lookup by id in this subtree (depth-first pre-order)
    pub fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        if self.id == id {
            return Some(self);
        }
        find_in_mut(&mut self.subtasks, id)
    }

    /// Number of nodes in this subtree, including the task itself
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + count_in(&self.subtasks)
    }

    /// Done/total counts over all descendants (board card progress)
    #[must_use]
    pub fn subtask_progress(&self) -> SubtaskProgress {
        let total = count_in(&self.subtasks);
        let done = self
            .subtasks
            .iter()
            .map(count_done_subtree)
            .sum();
        SubtaskProgress { done, total }
    }
}

/// Done/total descendant counts for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubtaskProgress {
    /// Descendants with status done
    pub done: usize,
    /// All descendants
    pub total: usize,
}

fn count_done_subtree(task: &Task) -> usize {
    let own = usize::from(task.status == Status::Done);
    own + task.subtasks.iter().map(count_done_subtree).sum::<usize>()
}

/// Find a task by id anywhere in a task sequence (depth-first pre-order)
#[must_use]
pub fn find_in(tasks: &[Task], id: TaskId) -> Option<&Task> {
    tasks.iter().find_map(|task| task.find(id))
}

/// Mutable lookup by id anywhere in a task sequence (depth-first pre-order)
pub fn find_in_mut(tasks: &mut [Task], id: TaskId) -> Option<&mut Task> {
    tasks.iter_mut().find_map(|task| task.find_mut(id))
}

/// Remove the task with matching id from the sequence, at any depth
///
/// The removed task carries its whole subtree with it; nothing is
/// re-parented. Returns `None` when no task matches.
pub fn remove_in(tasks: &mut Vec<Task>, id: TaskId) -> Option<Task> {
    if let Some(pos) = tasks.iter().position(|task| task.id == id) {
        return Some(tasks.remove(pos));
    }
    tasks
        .iter_mut()
        .find_map(|task| remove_in(&mut task.subtasks, id))
}

/// Total node count of a task sequence, all depths
#[must_use]
pub fn count_in(tasks: &[Task]) -> usize {
    tasks.iter().map(Task::subtree_len).sum()
}
