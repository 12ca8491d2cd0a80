//! # context-temporal
//!
//! Turns a concept's timestamped confidence history into a single
//! magnitude/phase estimate, and classifies how far an expectation sits from
//! that estimate.
//!
//! Time is always measured relative to the concept's own rhythm: the
//! natural timescale is the median gap between its measurements, and phase
//! is the age of the newest measurement expressed in those cycles.

pub mod mismatch;
pub mod recency;
pub mod stage;
pub mod thresholds;
pub mod timescale;

pub use mismatch::compute_mismatch;
pub use recency::observe;
pub use stage::classify_stage;
pub use thresholds::derive_stage_thresholds;
pub use timescale::{derive_timescale, median};
