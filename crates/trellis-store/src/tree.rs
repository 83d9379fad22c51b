//! Task tree store
//!
//! Owns one project's task tree and every mutation on it:
//! - create (root task or subtask under any parent)
//! - edit / status move / reorder
//! - delete with subtree
//! - derived filter and sort views
//!
//! Mutations are fail-soft: invalid input is a no-op reported through the
//! return value. Every successful mutation fires a save on the injected
//! adapter without awaiting or inspecting it.

use crate::config::{AxisMode, StoreConfig};
use crate::error::StoreError;
use crate::filter::{compare, SortField, SortOrder, TaskFilter};
use trellis_persist::KeyValueStore;
use trellis_task::{
    count_in, find_in, find_in_mut, remove_in, snapshot, Importance, Status, Task, TaskDraft,
    TaskEdit, TaskId,
};

/// In-memory task tree for one project, with write-through persistence
///
/// The store exclusively owns its tree; a single instance per persisted
/// record at a time is assumed and not enforced here.
#[derive(Debug)]
pub struct TaskTreeStore<S> {
    key: String,
    adapter: S,
    config: StoreConfig,
    tasks: Vec<Task>,
}

impl<S: KeyValueStore> TaskTreeStore<S> {
    /// Open the store, restoring any snapshot persisted under `key`
    ///
    /// Load problems are fail-soft: a missing record, an unreadable adapter
    /// or a malformed snapshot all produce an empty tree with a warning,
    /// never a panic.
    #[must_use]
    pub fn open(key: impl Into<String>, adapter: S, config: StoreConfig) -> Self {
        let key = key.into();
        let tasks = match adapter.load(&key) {
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(decoded) => {
                    if decoded.dropped > 0 {
                        tracing::warn!(
                            "dropped {} duplicate-id tasks while loading {}",
                            decoded.dropped,
                            key
                        );
                    }
                    decoded.tasks
                }
                Err(err) => {
                    tracing::warn!("discarding malformed snapshot under {}: {}", key, err);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!("load failed for {}: {}", key, err);
                Vec::new()
            }
        };

        Self {
            key,
            adapter,
            config,
            tasks,
        }
    }

    /// Append a new leaf task to the root sequence
    ///
    /// Returns the new task's id, or `None` (tree untouched) when the
    /// draft's title is empty or whitespace.
    pub fn add_task(&mut self, draft: TaskDraft) -> Option<TaskId> {
        if draft.is_blank() {
            tracing::warn!("rejected blank-title task for {}", self.key);
            return None;
        }

        let importance = self.resolve_importance(draft.importance);
        let task = draft.into_task(importance);
        let id = task.id;
        self.tasks.push(task);
        tracing::debug!("added task {} to {}", id, self.key);
        self.persist();
        Some(id)
    }

    /// Append a new leaf under the task with `parent_id`, at any depth
    ///
    /// Returns the new task's id, or `None` when the parent is missing or
    /// the title is blank.
    pub fn add_subtask(&mut self, parent_id: TaskId, draft: TaskDraft) -> Option<TaskId> {
        if draft.is_blank() {
            tracing::warn!("rejected blank-title subtask for {}", self.key);
            return None;
        }
        if find_in(&self.tasks, parent_id).is_none() {
            tracing::warn!("subtask parent {} not found in {}", parent_id, self.key);
            return None;
        }

        let importance = self.resolve_importance(draft.importance);
        let task = draft.into_task(importance);
        let id = task.id;
        let parent = find_in_mut(&mut self.tasks, parent_id)?;
        parent.subtasks.push(task);
        tracing::debug!("added subtask {} under {} in {}", id, parent_id, self.key);
        self.persist();
        Some(id)
    }

    /// Apply a partial edit to the task with `id`, at any depth
    ///
    /// Subtasks are untouched. Returns `false` (no-op) when no task
    /// matches.
    pub fn edit_task(&mut self, id: TaskId, mut edit: TaskEdit) -> bool {
        if self.config.axis_mode == AxisMode::Single {
            edit.importance = None;
        }
        let Some(task) = find_in_mut(&mut self.tasks, id) else {
            tracing::warn!("edit target {} not found in {}", id, self.key);
            return false;
        };
        edit.apply_to(task);
        tracing::debug!("edited task {} in {}", id, self.key);
        self.persist();
        true
    }

    /// Remove the task with `id` and its whole subtree, at any depth
    ///
    /// Returns `false` (no-op) when no task matches.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(removed) = remove_in(&mut self.tasks, id) else {
            tracing::warn!("delete target {} not found in {}", id, self.key);
            return false;
        };
        tracing::debug!(
            "deleted task {} ({} nodes) from {}",
            id,
            removed.subtree_len(),
            self.key
        );
        self.persist();
        true
    }

    /// Move the task with `id` to another board column
    pub fn set_status(&mut self, id: TaskId, status: Status) -> bool {
        let Some(task) = find_in_mut(&mut self.tasks, id) else {
            tracing::warn!("status target {} not found in {}", id, self.key);
            return false;
        };
        task.status = status;
        task.touch();
        self.persist();
        true
    }

    /// Reorder the root sequence, moving `id` to position `index`
    ///
    /// The index is clamped to the end of the sequence. Only top-level
    /// tasks can be reordered; `false` when `id` is not one of them.
    pub fn move_task(&mut self, id: TaskId, index: usize) -> bool {
        let Some(from) = self.tasks.iter().position(|task| task.id == id) else {
            tracing::warn!("reorder target {} not at top level of {}", id, self.key);
            return false;
        };
        let task = self.tasks.remove(from);
        let to = index.min(self.tasks.len());
        self.tasks.insert(to, task);
        self.persist();
        true
    }

    /// Top-level tasks passing every set filter axis, in tree order
    ///
    /// Does not descend into subtasks. On a single-axis store the
    /// importance axis is ignored.
    #[must_use]
    pub fn filter_tasks(&self, filter: &TaskFilter) -> Vec<&Task> {
        let mut filter = filter.clone();
        if self.config.axis_mode == AxisMode::Single {
            filter.importance = None;
        }
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }

    /// Top-level tasks reordered by `field`; ties keep tree order
    #[must_use]
    pub fn sorted_tasks(&self, field: SortField, order: SortOrder) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.tasks.iter().collect();
        view.sort_by(|a, b| compare(a, b, field, order));
        view
    }

    /// Top-level tasks in the given board column
    #[must_use]
    pub fn tasks_with_status(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.status == status).collect()
    }

    /// The current top-level task sequence
    #[inline]
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Find a task by id, at any depth
    #[inline]
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        find_in(&self.tasks, id)
    }

    /// Number of top-level tasks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if the tree has no tasks
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whole-tree node count, all depths
    #[inline]
    #[must_use]
    pub fn total_count(&self) -> usize {
        count_in(&self.tasks)
    }

    /// Storage key this store persists under
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Store configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Persist the current tree, surfacing the result
    ///
    /// # Errors
    /// Returns error if encoding or the adapter write fails.
    pub fn flush(&self) -> Result<(), StoreError> {
        let raw = snapshot::encode(&self.tasks)?;
        self.adapter.save(&self.key, &raw)?;
        Ok(())
    }

    /// Replace the in-memory tree with the persisted snapshot
    ///
    /// Returns the number of top-level tasks restored. A missing record
    /// resets to an empty tree.
    ///
    /// # Errors
    /// Returns error if the adapter read or the decode fails.
    pub fn reload(&mut self) -> Result<usize, StoreError> {
        let tasks = match self.adapter.load(&self.key)? {
            Some(raw) => {
                let decoded = snapshot::decode(&raw)?;
                if decoded.dropped > 0 {
                    tracing::warn!(
                        "dropped {} duplicate-id tasks while reloading {}",
                        decoded.dropped,
                        self.key
                    );
                }
                decoded.tasks
            }
            None => Vec::new(),
        };
        self.tasks = tasks;
        Ok(self.tasks.len())
    }

    /// Importance a new task gets, per the configured axis mode
    fn resolve_importance(&self, drafted: Option<Importance>) -> Option<Importance> {
        match self.config.axis_mode {
            AxisMode::Single => None,
            AxisMode::Dual => Some(drafted.unwrap_or_default()),
        }
    }

    /// Write-through after a mutation; failures warn and are not retried
    fn persist(&self) {
        if let Err(err) = self.flush() {
            tracing::warn!("write-through failed for {}: {}", self.key, err);
        }
    }
}
