//! # context-observers
//!
//! Every measurement carries the observer that made it. This crate diffs
//! two observers' views of one concept, and aggregates those diffs across
//! concepts into a systematic bias verdict.

pub mod bias;
pub mod compare;
pub mod engine;

pub use bias::detect_systematic_bias;
pub use compare::compare_observers;
pub use engine::ObserverAnalyzer;
