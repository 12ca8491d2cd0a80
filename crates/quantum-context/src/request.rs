//! Builder for a confirmed record request.

/// Arguments to [`crate::ContextEngine::record`].
///
/// Nothing is written unless [`RecordRequest::confirm`] was called.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRequest {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    /// `None` uses `recording.default_confidence`.
    pub confidence: Option<f64>,
    /// `None` uses `recording.default_observer`.
    pub observer: Option<String>,
    pub evidence: Vec<String>,
    pub confirm: bool,
}

impl RecordRequest {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            confidence: None,
            observer: None,
            evidence: Vec::new(),
            confirm: false,
        }
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn observer(mut self, observer: impl Into<String>) -> Self {
        self.observer = Some(observer.into());
        self
    }

    pub fn evidence<I, T>(mut self, evidence: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.evidence = evidence.into_iter().map(Into::into).collect();
        self
    }

    /// Explicitly allow the write.
    pub fn confirm(mut self) -> Self {
        self.confirm = true;
        self
    }
}
