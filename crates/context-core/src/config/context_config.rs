//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    defaults, AnalysisConfig, ComparisonConfig, ObservabilityConfig, RecordingConfig,
    StorageConfig,
};
use crate::errors::ConfigError;

/// Environment variables recognised by [`ContextConfig::load`].
pub const ENV_GRAPH_PATH: &str = "QCONTEXT_GRAPH_PATH";
pub const ENV_DEFAULT_OBSERVER: &str = "QCONTEXT_DEFAULT_OBSERVER";
pub const ENV_INDEPENDENCE_THRESHOLD: &str = "QCONTEXT_INDEPENDENCE_THRESHOLD";
pub const ENV_MIN_SHARED_SUBJECTS: &str = "QCONTEXT_MIN_SHARED_SUBJECTS";
pub const ENV_LOG_LEVEL: &str = "QCONTEXT_LOG_LEVEL";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`QCONTEXT_*`)
/// 2. Explicit config file passed to [`ContextConfig::load`]
/// 3. User config (`~/.quantum-context/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContextConfig {
    pub storage: StorageConfig,
    pub recording: RecordingConfig,
    pub analysis: AnalysisConfig,
    pub comparison: ComparisonConfig,
    pub observability: ObservabilityConfig,
}

impl ContextConfig {
    /// Load configuration with layered resolution.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut layered = toml::Table::new();

        if let Some(user_path) = defaults::user_config_path() {
            if user_path.exists() {
                merge_tables(&mut layered, read_table(&user_path)?);
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            merge_tables(&mut layered, read_table(path)?);
        }

        let mut config: ContextConfig = toml::Value::Table(layered)
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ParseError {
                path: "<layered>".to_string(),
                message: e.to_string(),
            })?;

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `QCONTEXT_*` overrides from `lookup`. Unparsable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_GRAPH_PATH) {
            self.storage.graph_path = v;
        }
        if let Some(v) = lookup(ENV_DEFAULT_OBSERVER) {
            self.recording.default_observer = v;
        }
        if let Some(v) = lookup(ENV_INDEPENDENCE_THRESHOLD).and_then(|v| v.parse().ok()) {
            self.analysis.independence_threshold = v;
        }
        if let Some(v) = lookup(ENV_MIN_SHARED_SUBJECTS).and_then(|v| v.parse().ok()) {
            self.comparison.min_shared_subjects = v;
        }
        if let Some(v) = lookup(ENV_LOG_LEVEL) {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit_fields = [
            ("recording.default_confidence", self.recording.default_confidence),
            ("recording.confidence_ceiling", self.recording.confidence_ceiling),
            ("analysis.independence_threshold", self.analysis.independence_threshold),
            ("comparison.bias_margin", self.comparison.bias_margin),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if self.comparison.min_shared_subjects == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "comparison.min_shared_subjects".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.storage.graph_path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "storage.graph_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The record log location as a path.
    pub fn graph_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.graph_path)
    }
}

fn read_table(path: &Path) -> Result<toml::Table, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.display().to_string(),
    })?;
    content.parse::<toml::Table>().map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge `overlay` into `base`. Nested tables merge key by key; any other
/// value in `overlay` replaces the one in `base`.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_tables_merge_key_by_key() {
        let mut base: toml::Table = "[analysis]\nindependence_threshold = 0.4\n[recording]\ndefault_observer = \"a\""
            .parse()
            .unwrap();
        let overlay: toml::Table = "[recording]\ndefault_observer = \"b\"".parse().unwrap();
        merge_tables(&mut base, overlay);

        let config: ContextConfig = toml::Value::Table(base).try_into().unwrap();
        assert_eq!(config.recording.default_observer, "b");
        assert_eq!(config.analysis.independence_threshold, 0.4);
    }
}
