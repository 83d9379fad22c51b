//! The persistence hook trait
//!
//! A store's only external collaborator: a string key-value store in the
//! shape of browser local storage. Adapters are injected at store
//! construction; blanket impls let one adapter back several stores.

use crate::error::PersistError;
use std::sync::Arc;

/// String key-value store
///
/// # Contract
/// - `load` returns `Ok(None)` for an absent key, never an error
/// - `save` overwrites any existing value
/// - `remove` of an absent key succeeds
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// # Errors
    /// Returns error if the backing medium cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Write `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns error if the backing medium cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), PersistError>;

    /// Delete the value under `key`, if any
    ///
    /// # Errors
    /// Returns error if the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), PersistError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn load(&self, key: &str) -> Result<Option<String>, PersistError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistError> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), PersistError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn load(&self, key: &str) -> Result<Option<String>, PersistError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistError> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), PersistError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, PersistError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistError> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), PersistError> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn arc_adapter_shares_backing_map() {
        let store = Arc::new(MemoryStore::new());
        let a = Arc::clone(&store);
        let b = Arc::clone(&store);

        a.save("k", "v").unwrap();
        assert_eq!(b.load("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn reference_adapter_delegates() {
        let store = MemoryStore::new();
        let by_ref = &store;
        by_ref.save("k", "v").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("v"));
    }
}
