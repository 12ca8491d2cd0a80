//! Append-only NDJSON record store on the local filesystem.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use context_core::config::StorageConfig;
use context_core::errors::{ContextResult, StorageError};
use context_core::{IRecordStore, Measurement};
use context_observability::events;

use crate::codec;
use crate::to_storage_err;

/// Append-only record log backed by a newline-delimited JSON file.
///
/// Every read re-reads the file, so there is no in-process state to go stale.
/// Each append is a single `write_all` of one complete line on a file opened
/// in append mode.
#[derive(Debug, Clone)]
pub struct NdjsonStore {
    path: PathBuf,
    sync_on_append: bool,
}

impl NdjsonStore {
    /// Open a store at `path`. The file is created lazily on first append.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sync_on_append: false,
        }
    }

    /// Open the store described by a storage config.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            path: PathBuf::from(&config.graph_path),
            sync_on_append: config.sync_on_append,
        }
    }

    /// Flush each append to disk with `sync_data`.
    pub fn with_sync(mut self, sync_on_append: bool) -> Self {
        self.sync_on_append = sync_on_append;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> ContextResult<Vec<Measurement>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(to_storage_err(&self.path, e)),
        };

        let decoded = codec::decode_log(&bytes);
        for &line in &decoded.skipped_lines {
            events::malformed_record_skipped(&self.path.display().to_string(), line);
        }
        debug!(
            path = %self.path.display(),
            records = decoded.measurements.len(),
            "loaded record log"
        );
        Ok(decoded.measurements)
    }

    fn ensure_parent(&self) -> ContextResult<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl IRecordStore for NdjsonStore {
    fn load(&self, subject: &str) -> ContextResult<Vec<Measurement>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|m| m.subject == subject)
            .collect())
    }

    fn load_all(&self) -> ContextResult<Vec<Measurement>> {
        self.read_all()
    }

    fn append(&self, measurement: &Measurement) -> ContextResult<()> {
        let line = codec::encode_line(measurement)?;
        self.ensure_parent()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| to_storage_err(&self.path, e))?;
        file.write_all(&line)
            .map_err(|e| to_storage_err(&self.path, e))?;
        if self.sync_on_append {
            file.sync_data()
                .map_err(|e| to_storage_err(&self.path, e))?;
        }
        Ok(())
    }
}
