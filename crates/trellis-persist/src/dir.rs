//! On-disk adapter
//!
//! One file per key under a root directory. Keys are hex-encoded into file
//! names so arbitrary key strings (`prefix:tasks:<uuid>`) stay valid paths
//! on every platform.

use crate::error::PersistError;
use crate::store::KeyValueStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory-backed adapter, one file per key
#[derive(Debug)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open an adapter rooted at `root`, creating the directory if needed
    ///
    /// # Errors
    /// Returns error if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| PersistError::Io {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Root directory of this adapter
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", hex::encode(key)))
    }
}

impl KeyValueStore for DirStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistError> {
        fs::write(self.path_for(key), value).map_err(|source| PersistError::Io {
            key: key.to_string(),
            source,
        })
    }

    fn remove(&self, key: &str) -> Result<(), PersistError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(PersistError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::open(dir.path()).unwrap();

        store.save("tasks:demo", "[1,2]").unwrap();
        assert_eq!(store.load("tasks:demo").unwrap().as_deref(), Some("[1,2]"));

        store.remove("tasks:demo").unwrap();
        assert_eq!(store.load("tasks:demo").unwrap(), None);
    }

    #[test]
    fn load_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::open(dir.path()).unwrap();
        assert_eq!(store.load("never-written").unwrap(), None);
    }

    #[test]
    fn keys_with_separators_are_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::open(dir.path()).unwrap();

        store.save("a:b", "1").unwrap();
        store.save("a_b", "2").unwrap();

        assert_eq!(store.load("a:b").unwrap().as_deref(), Some("1"));
        assert_eq!(store.load("a_b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = DirStore::open(dir.path()).unwrap();
            store.save("k", "persisted").unwrap();
        }
        let store = DirStore::open(dir.path()).unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("persisted"));
    }
}
