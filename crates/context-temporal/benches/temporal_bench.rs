use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use context_core::Measurement;
use context_temporal::{compute_mismatch, derive_stage_thresholds, observe};
use test_fixtures::measurement_at;

fn synthetic_log(subjects: usize, per_subject: usize) -> Vec<Measurement> {
    let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let mut log = Vec::with_capacity(subjects * per_subject);
    for i in 0..per_subject {
        for s in 0..subjects {
            let confidence = ((s * 13 + i * 7) % 100) as f64 / 100.0;
            let at = base + Duration::minutes((i * subjects + s) as i64);
            log.push(measurement_at(&format!("concept-{s}"), "is", "x", confidence, "o", at));
        }
    }
    log
}

fn bench_temporal(c: &mut Criterion) {
    let log = synthetic_log(100, 20);
    let now = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();

    c.bench_function("observe_2000_records", |b| {
        b.iter(|| observe(black_box("concept-42"), black_box(&log), now))
    });
    c.bench_function("derive_stage_thresholds_2000_records", |b| {
        b.iter(|| derive_stage_thresholds(black_box(&log)))
    });
    c.bench_function("compute_mismatch_2000_records", |b| {
        b.iter(|| compute_mismatch("concept-42", 0.9, black_box(&log), black_box(&log), now))
    });
}

criterion_group!(benches, bench_temporal);
criterion_main!(benches);
