//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log an appended measurement. Warn level: the shared log was mutated.
pub fn measurement_recorded(subject: &str, predicate: &str, object: &str, confidence: f64, observer: &str) {
    tracing::warn!(
        event = "measurement_recorded",
        subject = %subject,
        predicate = %predicate,
        object = %object,
        confidence = confidence,
        observer = %observer,
        "RECORDING measurement"
    );
}

/// Log a confidence lowered to the ceiling for lack of evidence.
pub fn confidence_capped(subject: &str, requested: f64, ceiling: f64) {
    tracing::warn!(
        event = "confidence_capped",
        subject = %subject,
        requested = requested,
        ceiling = ceiling,
        "confidence capped: no evidence cited"
    );
}

/// Log a confidence above the ceiling admitted because evidence was cited.
pub fn confidence_accepted_with_evidence(subject: &str, confidence: f64, citations: usize) {
    tracing::info!(
        event = "confidence_accepted_with_evidence",
        subject = %subject,
        confidence = confidence,
        citations = citations,
        "high confidence accepted with evidence"
    );
}

/// Log a persisted line that could not be decoded.
pub fn malformed_record_skipped(path: &str, line: usize) {
    tracing::warn!(
        event = "malformed_record_skipped",
        path = %path,
        line = line,
        "malformed record skipped"
    );
}

/// Log a bias request that lacked shared subjects.
pub fn insufficient_shared_subjects(observer: &str, reference: &str, required: usize, available: usize) {
    tracing::info!(
        event = "insufficient_shared_subjects",
        observer = %observer,
        reference = %reference,
        required = required,
        available = available,
        "insufficient shared subjects for bias detection"
    );
}
