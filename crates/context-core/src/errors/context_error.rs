use super::{ConfigError, StorageError};

/// Top-level error for every quantum-context operation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error(
        "recording measurements requires explicit confirmation \
         ({subject} {predicate} {object}); set confirm to proceed"
    )]
    ConfirmationRequired {
        subject: String,
        predicate: String,
        object: String,
    },

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Convenience alias used across the workspace.
pub type ContextResult<T> = Result<T, ContextError>;

impl ContextError {
    pub fn is_confirmation_required(&self) -> bool {
        matches!(self, ContextError::ConfirmationRequired { .. })
    }
}
