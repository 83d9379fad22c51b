//! Trellis Persistence Hook
//!
//! The task store's only external collaborator: a string key-value store in
//! the shape of browser local storage.
//!
//! - [`KeyValueStore`]: the adapter trait (`load`/`save`/`remove`)
//! - [`MemoryStore`]: mutex-guarded map, the default test adapter
//! - [`DirStore`]: one file per key under a directory
//!
//! Adapters are injected into stores at construction; there is no ambient
//! global storage.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod dir;
mod error;
mod memory;
mod store;

// Re-exports
pub use dir::DirStore;
pub use error::PersistError;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
