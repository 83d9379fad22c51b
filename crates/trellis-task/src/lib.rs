//! Trellis Task Model
//!
//! The task entity and its recursive tree:
//!
//! - [`Task`]: a task node owning its ordered subtasks
//! - [`TaskId`] / [`ProjectId`]: stable identifiers
//! - [`Priority`] / [`Importance`] / [`Status`]: field enumerations
//! - [`TaskDraft`] / [`TaskEdit`]: creation and partial-update payloads
//! - [`snapshot`]: the persisted JSON wire form
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_task::{Task, TaskDraft, Priority};
//!
//! let task = TaskDraft::new("Design homepage")
//!     .with_priority(Priority::High)
//!     .into_task(None);
//!
//! assert_eq!(task.subtree_len(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod draft;
mod fields;
mod id;
mod task;

/// Snapshot wire encoding
pub mod snapshot;

// Re-exports
pub use draft::{TaskDraft, TaskEdit};
pub use fields::{Importance, ParseFieldError, Priority, Status};
pub use id::{ProjectId, TaskId};
pub use snapshot::{DecodedTasks, SnapshotError};
pub use task::{count_in, find_in, find_in_mut, remove_in, SubtaskProgress, Task};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
