use proptest::prelude::*;

use context_core::Measurement;
use context_observers::compare_observers;
use test_fixtures::measurement;

const OBJECTS: [&str; 5] = ["db", "cache", "queue", "jwt", "identity"];
const OBSERVERS: [&str; 2] = ["alice", "bob"];

fn arb_log() -> impl Strategy<Value = Vec<Measurement>> {
    prop::collection::vec((0..OBJECTS.len(), 0..OBSERVERS.len(), 0.0..=1.0f64), 0..20).prop_map(
        |rows| {
            rows.into_iter()
                .map(|(o, obs, c)| measurement("auth", "uses", OBJECTS[o], c, OBSERVERS[obs]))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn agreement_is_a_ratio(log in arb_log()) {
        let cmp = compare_observers("auth", "alice", "bob", &log);
        prop_assert!((0.0..=1.0).contains(&cmp.agreement));
    }

    #[test]
    fn swapping_observers_negates_deltas(log in arb_log()) {
        let ab = compare_observers("auth", "alice", "bob", &log);
        let ba = compare_observers("auth", "bob", "alice", &log);
        prop_assert_eq!(&ab.shared_observations, &ba.shared_observations);
        prop_assert_eq!(&ab.only_observer_a, &ba.only_observer_b);
        prop_assert_eq!(ab.agreement, ba.agreement);
        for (object, d) in &ab.confidence_deltas {
            prop_assert!((d.delta + ba.confidence_deltas[object].delta).abs() < 1e-12);
        }
    }
}
