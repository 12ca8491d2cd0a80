//! # context-storage
//!
//! Record-store implementations for the measurement log.
//!
//! - [`NdjsonStore`]: one JSON-encoded measurement per line, append-only.
//!   A missing file is an empty log.
//! - [`InMemoryStore`]: the same contract held in process memory, for
//!   embedding and tests.

pub mod codec;
pub mod engine;
pub mod memory;

pub use engine::NdjsonStore;
pub use memory::InMemoryStore;

use std::path::Path;

use context_core::errors::{ContextError, StorageError};

/// Wrap an I/O failure on `path` as a `ContextError`.
pub fn to_storage_err(path: &Path, source: std::io::Error) -> ContextError {
    ContextError::Storage(StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}
