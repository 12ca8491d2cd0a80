use serde::{Deserialize, Serialize};

use super::defaults;

/// Dependency analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Correlation strictly below this marks two concepts independent.
    pub independence_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            independence_threshold: defaults::DEFAULT_INDEPENDENCE_THRESHOLD,
        }
    }
}
