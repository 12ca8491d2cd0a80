//! # context-observability
//!
//! Subscriber installation, span constructors and structured events shared
//! by every quantum-context crate that needs more than a bare `tracing` call.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing, init_tracing_with_filter};
