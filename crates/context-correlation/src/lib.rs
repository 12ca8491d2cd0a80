//! # context-correlation
//!
//! Bounded [0, 1] similarity between concepts, computed from their recorded
//! relations, and the dependency classifier built on it.
//!
//! The score is a heuristic. It is symmetric and bounded, but it is not a
//! metric: there is no triangle inequality and no graph search.

pub mod correlation;
pub mod dependencies;
pub mod engine;
pub mod matrix;
pub mod relations;

pub use correlation::{correlation, correlation_breakdown, CorrelationBreakdown};
pub use dependencies::analyze_dependencies;
pub use engine::CorrelationEngine;
pub use matrix::CorrelationMatrix;
pub use relations::{RelationIndex, RelationProfile};
