//! Error handling for quantum-context.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod context_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use context_error::{ContextError, ContextResult};
pub use storage_error::StorageError;
