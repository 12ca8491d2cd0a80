//! Property tests for confidence clamping and the write-time ceiling.

use proptest::prelude::*;

use context_core::measurement::CeilingDecision;
use context_core::Confidence;

proptest! {
    #[test]
    fn confidence_always_in_unit_range(value in -10.0..10.0f64) {
        let c = Confidence::new(value).value();
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn no_evidence_never_exceeds_ceiling(requested in -1.0..2.0f64, ceiling in 0.0..=1.0f64) {
        let (c, decision) = Confidence::admit(requested, 0, ceiling);
        prop_assert!(c.value() <= ceiling);
        prop_assert_eq!(
            matches!(decision, CeilingDecision::Capped { .. }),
            requested > ceiling
        );
    }

    #[test]
    fn evidence_keeps_requested_value(requested in 0.0..=1.0f64, citations in 1usize..5) {
        let (c, _) = Confidence::admit(requested, citations, 0.7);
        prop_assert_eq!(c.value(), requested);
    }
}
