use std::path::PathBuf;

/// Record-store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create storage directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize measurement: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("record store lock poisoned")]
    LockPoisoned,
}
