//! Span definitions per exposed operation: observe, analyze, mismatch, record, compare, bias.

/// Create an observe span.
#[macro_export]
macro_rules! observe_span {
    ($subject:expr) => {
        tracing::info_span!("context.observe", subject = %$subject)
    };
}

/// Create a dependency-analysis span.
#[macro_export]
macro_rules! analyze_span {
    ($subject:expr, $threshold:expr) => {
        tracing::info_span!("context.analyze", subject = %$subject, threshold = $threshold)
    };
}

/// Create a mismatch span.
#[macro_export]
macro_rules! mismatch_span {
    ($subject:expr, $expected:expr) => {
        tracing::info_span!("context.mismatch", subject = %$subject, expected = $expected)
    };
}

/// Create a record span.
#[macro_export]
macro_rules! record_span {
    ($subject:expr, $predicate:expr, $object:expr) => {
        tracing::info_span!(
            "context.record",
            subject = %$subject,
            predicate = %$predicate,
            object = %$object
        )
    };
}

/// Create an observer-comparison span.
#[macro_export]
macro_rules! compare_span {
    ($subject:expr, $observer_a:expr, $observer_b:expr) => {
        tracing::info_span!(
            "context.compare",
            subject = %$subject,
            observer_a = %$observer_a,
            observer_b = %$observer_b
        )
    };
}

/// Create a bias-detection span.
#[macro_export]
macro_rules! bias_span {
    ($observer:expr, $reference:expr) => {
        tracing::info_span!("context.bias", observer = %$observer, reference = %$reference)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const OBSERVE: &str = "context.observe";
    pub const ANALYZE: &str = "context.analyze";
    pub const MISMATCH: &str = "context.mismatch";
    pub const RECORD: &str = "context.record";
    pub const COMPARE: &str = "context.compare";
    pub const BIAS: &str = "context.bias";
}
