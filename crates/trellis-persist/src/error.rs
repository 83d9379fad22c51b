//! Adapter error type

/// Failures raised by persistence adapters
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Filesystem access failed
    #[error("io failure for key {key}: {source}")]
    Io {
        /// Storage key being accessed
        key: String,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// A lock guarding the backing map was poisoned
    #[error("adapter lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_key() {
        let err = PersistError::Io {
            key: "tasks:demo".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("tasks:demo"));
    }
}
