use context_core::errors::*;

#[test]
fn confirmation_required_mentions_confirmation() {
    let err = ContextError::ConfirmationRequired {
        subject: "a".to_string(),
        predicate: "requires".to_string(),
        object: "b".to_string(),
    };
    assert!(err.is_confirmation_required());
    assert!(err.to_string().contains("confirmation"));
}

#[test]
fn storage_errors_convert() {
    let err: ContextError = StorageError::LockPoisoned.into();
    assert!(matches!(err, ContextError::Storage(StorageError::LockPoisoned)));
    assert!(!err.is_confirmation_required());
}

#[test]
fn config_errors_convert() {
    let err: ContextError = ConfigError::ValidationFailed {
        field: "analysis.independence_threshold".to_string(),
        message: "must be between 0.0 and 1.0".to_string(),
    }
    .into();
    assert!(err.to_string().contains("analysis.independence_threshold"));
}
