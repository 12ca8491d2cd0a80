use serde::{Deserialize, Serialize};

use super::defaults;

/// Record-store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the NDJSON record log.
    pub graph_path: String,
    /// Call `sync_data` after every append.
    pub sync_on_append: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            graph_path: defaults::default_graph_path().to_string_lossy().into_owned(),
            sync_on_append: defaults::DEFAULT_SYNC_ON_APPEND,
        }
    }
}
