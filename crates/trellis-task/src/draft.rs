//! Creation and edit payloads
//!
//! [`TaskDraft`] mirrors the task form: everything optional except the
//! title. [`TaskEdit`] is a partial update where `None` means "leave the
//! field alone"; nullable fields nest an option so they can be cleared.

use crate::fields::{Importance, Priority, Status};
use crate::task::Task;
use chrono::{DateTime, Utc};

/// Payload for creating a task
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    /// Display title; a blank title makes the draft invalid
    pub title: String,
    /// Free-form description
    pub description: Option<String>,
    /// Due date
    pub due_date: Option<DateTime<Utc>>,
    /// Priority axis, defaults to medium
    pub priority: Priority,
    /// Importance axis; resolved against the store's axis mode
    pub importance: Option<Importance>,
    /// Workflow status, defaults to todo
    pub status: Status,
    /// Assigned person
    pub assignee: Option<String>,
    /// Labels
    pub tags: Vec<String>,
}

impl TaskDraft {
    /// Create draft with the given title and default fields
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: Priority::default(),
            importance: None,
            status: Status::default(),
            assignee: None,
            tags: Vec::new(),
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

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With due date
    #[inline]
    #[must_use]
    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    /// With assignee
    #[inline]
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// With a tag appended
    #[inline]
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// A draft with an empty or whitespace-only title is rejected
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }

    /// Build the leaf task this draft describes
    ///
    /// `importance` is passed in resolved because the store's axis mode
    /// decides it, not the draft.
    #[must_use]
    pub fn into_task(self, importance: Option<Importance>) -> Task {
        let now = Utc::now();
        Task {
            id: crate::id::TaskId::new(),
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            importance,
            status: self.status,
            assignee: self.assignee,
            tags: self.tags,
            created_at: now,
            updated_at: now,
            subtasks: Vec::new(),
        }
    }
}

/// Partial update for a task
///
/// `None` fields are left unchanged. Nullable fields (`description`,
/// `due_date`, `importance`, `assignee`) nest a second option: the outer
/// `Some(None)` clears the value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskEdit {
    /// New title; a blank title is ignored
    pub title: Option<String>,
    /// New description, or `Some(None)` to clear
    pub description: Option<Option<String>>,
    /// New due date, or `Some(None)` to clear
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// New priority
    pub priority: Option<Priority>,
    /// New importance, or `Some(None)` to clear
    pub importance: Option<Option<Importance>>,
    /// New status
    pub status: Option<Status>,
    /// New assignee, or `Some(None)` to clear
    pub assignee: Option<Option<String>>,
    /// Replacement tag list
    pub tags: Option<Vec<String>>,
}

impl TaskEdit {
    /// Create empty edit (applies as a pure touch)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set title
    #[inline]
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set description
    #[inline]
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clear description
    #[inline]
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Set due date
    #[inline]
    #[must_use]
    pub fn due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due));
        self
    }

    /// Clear due date
    #[inline]
    #[must_use]
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Set priority
    #[inline]
    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set importance
    #[inline]
    #[must_use]
    pub fn importance(mut self, importance: Importance) -> Self {
        self.importance = Some(Some(importance));
        self
    }

    /// Clear importance
    #[inline]
    #[must_use]
    pub fn clear_importance(mut self) -> Self {
        self.importance = Some(None);
        self
    }

    /// Set status
    #[inline]
    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set assignee
    #[inline]
    #[must_use]
    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(Some(assignee.into()));
        self
    }

    /// Clear assignee
    #[inline]
    #[must_use]
    pub fn clear_assignee(mut self) -> Self {
        self.assignee = Some(None);
        self
    }

    /// Replace tags
    #[inline]
    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Apply the edit to a task in place, touching `updated_at`
    ///
    /// Subtasks are never affected. A `Some` title that trims to empty is
    /// skipped, keeping the old title.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            if !title.trim().is_empty() {
                task.title = title.clone();
            }
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(importance) = self.importance {
            task.importance = importance;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(assignee) = &self.assignee {
            task.assignee = assignee.clone();
        }
        if let Some(tags) = &self.tags {
            task.tags = tags.clone();
        }
        task.touch();
    }
}
