//! Trellis Store
//!
//! The task tree store and project registry:
//!
//! - [`TaskTreeStore`]: one project's recursive task tree, with fail-soft
//!   mutations, derived filter/sort views, and write-through persistence
//!   into an injected [`trellis_persist::KeyValueStore`]
//! - [`ProjectRegistry`]: insertion-ordered project bookkeeping, handing
//!   out per-project tree stores over a shared adapter
//! - [`StoreConfig`]: axis mode and storage key prefix
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_persist::MemoryStore;
//! use trellis_store::{StoreConfig, TaskTreeStore, TaskFilter};
//! use trellis_task::{Priority, TaskDraft};
//!
//! let mut store = TaskTreeStore::open("demo:tasks", MemoryStore::new(), StoreConfig::new());
//!
//! let id = store.add_task(TaskDraft::new("Design homepage").with_priority(Priority::High));
//! let urgent = store.filter_tasks(&TaskFilter::all().with_priority(Priority::High));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod config;
mod error;
mod filter;
mod registry;
mod tree;

// Re-exports
pub use config::{AxisMode, StoreConfig};
pub use error::StoreError;
pub use filter::{compare, SortField, SortOrder, TaskFilter};
pub use registry::{Project, ProjectRegistry};
pub use tree::TaskTreeStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the store
    pub use crate::{
        AxisMode, ProjectRegistry, SortField, SortOrder, StoreConfig, TaskFilter, TaskTreeStore,
    };
    pub use trellis_task::{Importance, Priority, Status, TaskDraft, TaskEdit, TaskId};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
