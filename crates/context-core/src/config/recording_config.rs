use serde::{Deserialize, Serialize};

use super::defaults;

/// Write-time policy for new measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordingConfig {
    /// Observer tag used when a caller names none.
    pub default_observer: String,
    /// Confidence used when a caller supplies none.
    pub default_confidence: f64,
    /// Confidence above this needs evidence.
    pub confidence_ceiling: f64,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            default_observer: defaults::DEFAULT_OBSERVER.to_string(),
            default_confidence: defaults::DEFAULT_CONFIDENCE,
            confidence_ceiling: defaults::DEFAULT_CONFIDENCE_CEILING,
        }
    }
}
