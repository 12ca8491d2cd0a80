//! Configuration system for quantum-context.
//! TOML-based, layered: env > explicit file > user file > defaults.

pub mod analysis_config;
pub mod comparison_config;
pub mod context_config;
pub mod defaults;
pub mod observability_config;
pub mod recording_config;
pub mod storage_config;

pub use analysis_config::AnalysisConfig;
pub use comparison_config::ComparisonConfig;
pub use context_config::ContextConfig;
pub use observability_config::ObservabilityConfig;
pub use recording_config::RecordingConfig;
pub use storage_config::StorageConfig;
