//! Testing utilities for the Trellis workspace
//!
//! Shared fixtures: drafts, adapters, and pre-populated stores.

#![allow(missing_docs)]

use std::sync::Arc;
use trellis_persist::MemoryStore;
use trellis_store::{StoreConfig, TaskTreeStore};
use trellis_task::{Priority, TaskDraft, TaskId};

pub const TEST_KEY: &str = "test:tasks";

pub fn draft(title: &str) -> TaskDraft {
    TaskDraft::new(title)
}

pub fn draft_with_priority(title: &str, priority: Priority) -> TaskDraft {
    TaskDraft::new(title).with_priority(priority)
}

pub fn memory_tree() -> TaskTreeStore<MemoryStore> {
    TaskTreeStore::open(TEST_KEY, MemoryStore::new(), StoreConfig::new())
}

pub fn shared_adapter() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

pub fn tree_on(adapter: Arc<MemoryStore>) -> TaskTreeStore<Arc<MemoryStore>> {
    TaskTreeStore::open(TEST_KEY, adapter, StoreConfig::new())
}

/// Store with three tasks at mixed priorities, the first carrying a subtask
pub fn seeded_tree() -> (TaskTreeStore<MemoryStore>, Vec<TaskId>) {
    let mut store = memory_tree();
    let a = store
        .add_task(draft_with_priority("design homepage", Priority::High))
        .expect("valid draft");
    let b = store
        .add_task(draft_with_priority("write docs", Priority::Medium))
        .expect("valid draft");
    let c = store
        .add_task(draft_with_priority("tidy backlog", Priority::Low))
        .expect("valid draft");
    store
        .add_subtask(a, draft("collect wireframes"))
        .expect("parent exists");
    (store, vec![a, b, c])
}
