//! Derived report types. All of these are recomputed per call and never persisted.

pub mod bias;
pub mod comparison;
pub mod dependency_graph;
pub mod mismatch;
pub mod record_outcome;
pub mod stage;
pub mod summary;
pub mod wave_amplitude;

pub use bias::{BiasAssessment, BiasReport, BiasType, InsufficientData};
pub use comparison::{ConfidenceDelta, ObserverComparison};
pub use dependency_graph::DependencyGraph;
pub use mismatch::MismatchReport;
pub use record_outcome::RecordOutcome;
pub use stage::{Stage, StageThresholds};
pub use summary::{LogSummary, RelationLine, SubjectSummary};
pub use wave_amplitude::{ConfidenceLabel, WaveAmplitude};
