use serde::{Deserialize, Serialize};

use super::defaults;

/// Observer comparison and bias detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Shared subjects required before bias is assessed.
    pub min_shared_subjects: usize,
    /// Mean delta beyond ±margin counts as over/under confidence.
    pub bias_margin: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            min_shared_subjects: defaults::DEFAULT_MIN_SHARED_SUBJECTS,
            bias_margin: defaults::DEFAULT_BIAS_MARGIN,
        }
    }
}
