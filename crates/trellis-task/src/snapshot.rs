//! Snapshot wire encoding
//!
//! A store persists its full tree as one JSON array of task records with
//! camelCase field names (`id`, `title`, `dueDate`, `subtasks`, ...),
//! matching the browser-storage records earlier builds wrote. Decoding
//! tolerates records from older builds (missing fields take defaults) and
//! restores the id-uniqueness invariant by dropping duplicate-id nodes.

use crate::id::TaskId;
use crate::task::Task;
use std::collections::HashSet;

/// Snapshot encode/decode failures
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Tree could not be serialized
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// Persisted value is not a valid task array
    #[error("snapshot decoding failed: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Result of decoding a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTasks {
    /// The restored top-level task sequence
    pub tasks: Vec<Task>,
    /// Nodes dropped (with their subtrees) to restore id uniqueness
    pub dropped: usize,
}

/// Serialize a task sequence to its persisted form
///
/// # Errors
/// Returns [`SnapshotError::Encode`] if serialization fails.
pub fn encode(tasks: &[Task]) -> Result<String, SnapshotError> {
    serde_json::to_string(tasks).map_err(SnapshotError::Encode)
}

/// Deserialize a persisted snapshot
///
/// Duplicate-id nodes are removed together with their subtrees; the first
/// occurrence in depth-first pre-order wins. `dropped` reports how many
/// nodes were discarded.
///
/// # Errors
/// Returns [`SnapshotError::Decode`] if the value is not a task array.
pub fn decode(raw: &str) -> Result<DecodedTasks, SnapshotError> {
    let tasks: Vec<Task> = serde_json::from_str(raw).map_err(SnapshotError::Decode)?;

    let mut seen = HashSet::new();
    let mut dropped = 0;
    let tasks = dedupe(tasks, &mut seen, &mut dropped);

    Ok(DecodedTasks { tasks, dropped })
}

fn dedupe(tasks: Vec<Task>, seen: &mut HashSet<TaskId>, dropped: &mut usize) -> Vec<Task> {
    let mut kept = Vec::with_capacity(tasks.len());
    for mut task in tasks {
        if !seen.insert(task.id) {
            *dropped += task.subtree_len();
            continue;
        }
        task.subtasks = dedupe(std::mem::take(&mut task.subtasks), seen, dropped);
        kept.push(task);
    }
    kept
}
