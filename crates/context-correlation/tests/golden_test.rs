//! Golden scenarios for the correlation heuristic and dependency classifier.

use context_correlation::{analyze_dependencies, correlation_breakdown, CorrelationEngine};
use test_fixtures::load_scenario;

fn strings(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|v| v.as_str().expect("expected a string").to_string())
        .collect()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn auth_payment_breakdown_matches_golden() {
    let scenario = load_scenario("golden/correlation/auth_payment.json");
    let expected = &scenario.expected;

    let score = correlation_breakdown(&scenario.measurements, "auth", "payment");
    assert!(!score.direct_edge);
    assert!(approx(score.strong_overlap, expected["strong_overlap"].as_f64().unwrap()));
    assert!(approx(score.weak_overlap, expected["weak_overlap"].as_f64().unwrap()));
    assert!(approx(score.observer_overlap, expected["observer_overlap"].as_f64().unwrap()));
    assert!(approx(score.base, expected["base"].as_f64().unwrap()));
    assert!(approx(score.correlation, expected["correlation"].as_f64().unwrap()));
}

#[test]
fn auth_payment_dependencies_match_golden() {
    let scenario = load_scenario("golden/correlation/auth_payment.json");
    let expected = &scenario.expected["auth"];

    let graph = analyze_dependencies("auth", &scenario.measurements, 0.3);
    assert_eq!(graph.depends_on, strings(&expected["depends_on"]));
    assert_eq!(graph.independent_of, strings(&expected["independent_of"]));
    for (object, conf) in expected["shared_structure"].as_object().unwrap() {
        assert!(approx(graph.shared_structure[object], conf.as_f64().unwrap()));
    }
    assert_eq!(graph.shared_structure.len(), 2);
}

#[test]
fn unrelated_domains_are_independent() {
    let scenario = load_scenario("golden/correlation/independence_domains.json");
    let engine = CorrelationEngine::default();

    for subject in ["auth", "payment", "identity"] {
        let graph = engine.analyze(subject, &scenario.measurements);
        let expected = &scenario.expected[subject];

        for name in strings(&expected["independent_of"]) {
            assert!(
                graph.is_independent_of(&name),
                "{subject} should be independent of {name}: {:?}",
                graph.independent_of
            );
        }
        if let Some(not_independent) = expected.get("not_independent_of") {
            for name in strings(not_independent) {
                assert!(!graph.is_independent_of(&name), "{subject} vs {name}");
            }
        }
        if let Some(depends_on) = expected.get("depends_on") {
            assert_eq!(graph.depends_on, strings(depends_on));
        }
        assert!(!graph.is_independent_of(subject));
    }
}
