//! Store configuration

use serde::{Deserialize, Serialize};

/// How many priority axes a store carries
///
/// Product builds disagree on whether priority and importance are one axis
/// or two, so the store takes it as configuration rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    /// Priority only; importance is ignored on writes and in filters
    Single,
    /// Priority and importance as independent axes
    Dual,
}

impl Default for AxisMode {
    fn default() -> Self {
        AxisMode::Dual
    }
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Priority axis count
    pub axis_mode: AxisMode,
    /// Prefix for the storage keys the registry derives
    pub key_prefix: String,
}

impl StoreConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With axis mode
    #[inline]
    #[must_use]
    pub fn with_axis_mode(mut self, mode: AxisMode) -> Self {
        self.axis_mode = mode;
        self
    }

    /// With storage key prefix
    #[inline]
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            axis_mode: AxisMode::default(),
            key_prefix: "task-management".to_string(),
        }
    }
}
