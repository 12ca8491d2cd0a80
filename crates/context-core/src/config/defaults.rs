// Single source of truth for all default values.

use std::path::PathBuf;

// --- Storage ---
pub const DEFAULT_DATA_DIR: &str = ".quantum-context";
pub const DEFAULT_GRAPH_FILENAME: &str = "graph.ndjson";
pub const DEFAULT_CONFIG_FILENAME: &str = "config.toml";
pub const DEFAULT_SYNC_ON_APPEND: bool = false;

// --- Recording ---
pub const DEFAULT_OBSERVER: &str = "claude";
pub const DEFAULT_CONFIDENCE: f64 = crate::constants::DEFAULT_CONFIDENCE;
pub const DEFAULT_CONFIDENCE_CEILING: f64 = crate::constants::CONFIDENCE_CEILING;

// --- Analysis ---
pub const DEFAULT_INDEPENDENCE_THRESHOLD: f64 = 0.3;

// --- Comparison ---
pub const DEFAULT_MIN_SHARED_SUBJECTS: usize = 3;
pub const DEFAULT_BIAS_MARGIN: f64 = 0.1;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Cross-platform home directory resolution.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// `~/.quantum-context/`, or a relative `.quantum-context/` without a home directory.
pub fn data_dir() -> PathBuf {
    match home_dir() {
        Some(home) => home.join(DEFAULT_DATA_DIR),
        None => PathBuf::from(DEFAULT_DATA_DIR),
    }
}

/// `~/.quantum-context/graph.ndjson`.
pub fn default_graph_path() -> PathBuf {
    data_dir().join(DEFAULT_GRAPH_FILENAME)
}

/// `~/.quantum-context/config.toml`, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(DEFAULT_DATA_DIR).join(DEFAULT_CONFIG_FILENAME))
}
