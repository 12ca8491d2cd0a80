//! # quantum-context
//!
//! An append-only log of observer-tagged, confidence-scored statements about
//! named concepts, and the analyses derived from it on demand:
//!
//! - [`ContextEngine::observe`]: recency-weighted magnitude and phase of a concept
//! - [`ContextEngine::analyze_dependencies`]: what a concept depends on, and what it is independent of
//! - [`ContextEngine::compute_mismatch`]: how far an expectation sits from the evidence
//! - [`ContextEngine::compare_observers`] / [`ContextEngine::detect_systematic_bias`]: observer divergence
//!
//! Every operation re-reads the store. Nothing is cached.

pub mod engine;
pub mod export;
pub mod request;
pub mod summary;

pub use engine::ContextEngine;
pub use export::ExportFormat;
pub use request::RecordRequest;

pub use context_core::models;
pub use context_core::{ContextConfig, ContextError, ContextResult, IRecordStore, Measurement};
pub use context_correlation::{CorrelationBreakdown, CorrelationMatrix};
pub use context_storage::{InMemoryStore, NdjsonStore};
