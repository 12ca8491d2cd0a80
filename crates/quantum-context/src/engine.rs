//! ContextEngine: every exposed operation over one record store.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use context_core::measurement::CeilingDecision;
use context_core::models::{
    BiasAssessment, DependencyGraph, LogSummary, MismatchReport, ObserverComparison,
    RecordOutcome, WaveAmplitude,
};
use context_core::{Confidence, ContextConfig, ContextError, ContextResult, IRecordStore, Measurement};
use context_correlation::{CorrelationBreakdown, CorrelationEngine, CorrelationMatrix};
use context_observability::events;
use context_observability::{
    analyze_span, bias_span, compare_span, mismatch_span, observe_span, record_span,
};
use context_observers::ObserverAnalyzer;
use context_storage::NdjsonStore;

use crate::export::{self, ExportFormat};
use crate::request::RecordRequest;
use crate::summary;

/// The measurement log and its analyses.
///
/// Holds no derived state: each call re-reads the store and recomputes.
pub struct ContextEngine<S: IRecordStore = NdjsonStore> {
    store: S,
    config: ContextConfig,
    correlation: CorrelationEngine,
    observers: ObserverAnalyzer,
}

impl ContextEngine<NdjsonStore> {
    /// Open the NDJSON log at `config.storage.graph_path`.
    pub fn open(config: ContextConfig) -> Self {
        let store = NdjsonStore::from_config(&config.storage);
        Self::new(store, config)
    }
}

impl<S: IRecordStore> ContextEngine<S> {
    pub fn new(store: S, config: ContextConfig) -> Self {
        let correlation = CorrelationEngine::from_config(&config.analysis);
        let observers = ObserverAnalyzer::new(&config.comparison);
        Self {
            store,
            config,
            correlation,
            observers,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Recency-weighted estimate of `subject` as of now.
    ///
    /// `observer` is logged but does not filter which measurements count.
    pub fn observe(&self, subject: &str, observer: Option<&str>) -> ContextResult<WaveAmplitude> {
        self.observe_at(subject, observer, Utc::now())
    }

    pub fn observe_at(
        &self,
        subject: &str,
        observer: Option<&str>,
        now: DateTime<Utc>,
    ) -> ContextResult<WaveAmplitude> {
        let _span = observe_span!(subject).entered();
        info!(subject = %subject, observer = ?observer, "observe");

        let measurements = self.store.load(subject)?;
        Ok(context_temporal::observe(subject, &measurements, now))
    }

    /// Dependency graph of `subject`. `threshold` overrides `analysis.independence_threshold`.
    pub fn analyze_dependencies(
        &self,
        subject: &str,
        threshold: Option<f64>,
    ) -> ContextResult<DependencyGraph> {
        let threshold = match threshold {
            Some(t) => finite("threshold", t)?,
            None => self.correlation.threshold(),
        };
        let _span = analyze_span!(subject, threshold).entered();
        info!(subject = %subject, threshold, "analyze dependencies");

        let log = self.store.load_all()?;
        Ok(context_correlation::analyze_dependencies(subject, &log, threshold))
    }

    /// Correlation score of two concepts with every intermediate value.
    pub fn explain_correlation(&self, a: &str, b: &str) -> ContextResult<CorrelationBreakdown> {
        let log = self.store.load_all()?;
        Ok(self.correlation.explain(&log, a, b))
    }

    /// Pairwise correlations between every subject in the log.
    pub fn correlation_matrix(&self) -> ContextResult<CorrelationMatrix> {
        let log = self.store.load_all()?;
        Ok(self.correlation.matrix(&log))
    }

    /// Compare `expected` with the current estimate of `subject`.
    pub fn compute_mismatch(
        &self,
        subject: &str,
        expected: f64,
        observer: Option<&str>,
    ) -> ContextResult<MismatchReport> {
        self.compute_mismatch_at(subject, expected, observer, Utc::now())
    }

    pub fn compute_mismatch_at(
        &self,
        subject: &str,
        expected: f64,
        observer: Option<&str>,
        now: DateTime<Utc>,
    ) -> ContextResult<MismatchReport> {
        let expected = finite("expected_magnitude", expected)?;
        let _span = mismatch_span!(subject, expected).entered();
        info!(subject = %subject, expected, observer = ?observer, "compute mismatch");

        let log = self.store.load_all()?;
        let report = context_temporal::compute_mismatch(subject, expected, &log, &log, now);
        info!(
            subject = %subject,
            stage = %report.stage,
            delta = report.magnitude_delta,
            interference = report.interference,
            "mismatch computed"
        );
        Ok(report)
    }

    /// Append one measurement. Fails unless the request is confirmed.
    pub fn record(&self, request: RecordRequest) -> ContextResult<RecordOutcome> {
        self.record_at(request, Utc::now())
    }

    pub fn record_at(&self, request: RecordRequest, now: DateTime<Utc>) -> ContextResult<RecordOutcome> {
        let _span = record_span!(request.subject, request.predicate, request.object).entered();

        if !request.confirm {
            warn!(subject = %request.subject, "record refused: not confirmed");
            return Err(ContextError::ConfirmationRequired {
                subject: request.subject,
                predicate: request.predicate,
                object: request.object,
            });
        }

        let recording = &self.config.recording;
        let requested = finite(
            "confidence",
            request.confidence.unwrap_or(recording.default_confidence),
        )?;
        let observer = request
            .observer
            .unwrap_or_else(|| recording.default_observer.clone());

        let (confidence, decision) =
            Confidence::admit(requested, request.evidence.len(), recording.confidence_ceiling);
        let capped = match decision {
            CeilingDecision::Capped { requested } => {
                events::confidence_capped(&request.subject, requested, recording.confidence_ceiling);
                true
            }
            CeilingDecision::AcceptedWithEvidence { citations } => {
                events::confidence_accepted_with_evidence(
                    &request.subject,
                    confidence.value(),
                    citations,
                );
                false
            }
            CeilingDecision::WithinCeiling => false,
        };

        let measurement = Measurement::new(
            request.subject,
            request.predicate,
            request.object,
            confidence.value(),
            observer,
            now,
        )
        .with_evidence(request.evidence);

        events::measurement_recorded(
            &measurement.subject,
            &measurement.predicate,
            &measurement.object,
            measurement.confidence(),
            &measurement.observer,
        );
        self.store.append(&measurement)?;

        Ok(RecordOutcome::recorded(measurement, capped))
    }

    /// Diff two observers' records about `subject`.
    pub fn compare_observers(
        &self,
        subject: &str,
        observer_a: &str,
        observer_b: &str,
    ) -> ContextResult<ObserverComparison> {
        let _span = compare_span!(subject, observer_a, observer_b).entered();
        info!(subject = %subject, observer_a = %observer_a, observer_b = %observer_b, "compare observers");

        let measurements = self.store.load(subject)?;
        Ok(self.observers.compare(subject, observer_a, observer_b, &measurements))
    }

    /// Systematic bias of `observer` against `reference`.
    /// `min_shared_subjects` overrides `comparison.min_shared_subjects`.
    pub fn detect_systematic_bias(
        &self,
        observer: &str,
        reference: &str,
        min_shared_subjects: Option<usize>,
    ) -> ContextResult<BiasAssessment> {
        let _span = bias_span!(observer, reference).entered();
        info!(observer = %observer, reference = %reference, "detect bias");

        let log = self.store.load_all()?;
        let assessment = self.observers.bias(observer, reference, min_shared_subjects, &log);
        if let BiasAssessment::InsufficientData(info) = &assessment {
            events::insufficient_shared_subjects(observer, reference, info.required, info.available);
        }
        Ok(assessment)
    }

    /// Per-subject listing of the whole log.
    pub fn summarize(&self) -> ContextResult<LogSummary> {
        let log = self.store.load_all()?;
        Ok(summary::summarize(&log))
    }

    /// The whole log, serialized.
    pub fn export(&self, format: ExportFormat) -> ContextResult<String> {
        let log = self.store.load_all()?;
        export::export(&log, format)
    }
}

fn finite(field: &str, value: f64) -> ContextResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ContextError::InvalidInput {
            field: field.to_string(),
            reason: format!("must be a finite number, got {value}"),
        })
    }
}
