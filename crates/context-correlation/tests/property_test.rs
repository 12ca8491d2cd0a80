//! Property tests: the correlation score is bounded, symmetric, and a direct
//! edge always dominates.

use context_core::Measurement;
use context_correlation::correlation;
use proptest::prelude::*;
use test_fixtures::measurement;

const CONCEPTS: [&str; 6] = ["auth", "payment", "identity", "db", "cache", "queue"];
const PREDICATES: [&str; 6] = ["requires", "depends-on", "uses", "calls", "needs", "composed-of"];
const OBSERVERS: [&str; 3] = ["alice", "bob", "carol"];

fn arb_measurement() -> impl Strategy<Value = Measurement> {
    (0..CONCEPTS.len(), 0..PREDICATES.len(), 0..CONCEPTS.len(), 0..OBSERVERS.len(), 0.0..=1.0f64)
        .prop_map(|(s, p, o, obs, c)| {
            measurement(CONCEPTS[s], PREDICATES[p], CONCEPTS[o], c, OBSERVERS[obs])
        })
}

fn arb_log() -> impl Strategy<Value = Vec<Measurement>> {
    prop::collection::vec(arb_measurement(), 0..25)
}

proptest! {
    #[test]
    fn correlation_is_bounded(log in arb_log(), a in 0..CONCEPTS.len(), b in 0..CONCEPTS.len()) {
        let score = correlation(&log, CONCEPTS[a], CONCEPTS[b]);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn correlation_is_symmetric(log in arb_log(), a in 0..CONCEPTS.len(), b in 0..CONCEPTS.len()) {
        let ab = correlation(&log, CONCEPTS[a], CONCEPTS[b]);
        let ba = correlation(&log, CONCEPTS[b], CONCEPTS[a]);
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn direct_edge_scores_exactly_point_eight(
        mut log in arb_log(),
        a in 0..CONCEPTS.len(),
        b in 0..CONCEPTS.len(),
    ) {
        prop_assume!(a != b);
        log.push(measurement(CONCEPTS[a], "uses", CONCEPTS[b], 0.5, "alice"));
        prop_assert_eq!(correlation(&log, CONCEPTS[a], CONCEPTS[b]), 0.8);
    }
}
