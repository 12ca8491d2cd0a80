//! Whole-log export as NDJSON or a JSON array.

use serde::{Deserialize, Serialize};

use context_core::errors::StorageError;
use context_core::{ContextResult, Measurement};

/// Serialization of a full log export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// One JSON record per line, the same layout as the log file.
    #[default]
    Ndjson,
    /// A pretty-printed JSON array.
    Json,
}

pub fn export(measurements: &[Measurement], format: ExportFormat) -> ContextResult<String> {
    let text = match format {
        ExportFormat::Ndjson => {
            let mut out = String::new();
            for m in measurements {
                out.push_str(&serde_json::to_string(m).map_err(|source| StorageError::Serialize { source })?);
                out.push('\n');
            }
            out
        }
        ExportFormat::Json => serde_json::to_string_pretty(measurements)
            .map_err(|source| StorageError::Serialize { source })?,
    };
    Ok(text)
}
