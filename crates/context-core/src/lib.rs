//! # context-core
//!
//! Foundation crate for the quantum-context measurement log.
//! Defines the measurement record, the derived report types, the record-store
//! trait, errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod measurement;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ContextConfig;
pub use errors::{ContextError, ContextResult};
pub use measurement::{Confidence, Measurement};
pub use traits::IRecordStore;
