//! Store error type
//!
//! Mutations are fail-soft and never surface errors; this type exists for
//! the explicit persistence boundary (`flush`/`reload`), where callers asked
//! for the result.

use trellis_persist::PersistError;
use trellis_task::SnapshotError;

/// Failures at the explicit persistence boundary
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Adapter failure
    #[error("persistence failed: {0}")]
    Persist(#[from] PersistError),

    /// Snapshot encode/decode failure
    #[error("snapshot failed: {0}")]
    Snapshot(#[from] SnapshotError),
}
