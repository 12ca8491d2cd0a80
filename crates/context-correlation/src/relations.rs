//! Per-concept view of outgoing relations.

use std::collections::{HashMap, HashSet};

use context_core::constants::is_structural;
use context_core::Measurement;

/// Everything a concept says about other concepts, bucketed by predicate strength.
#[derive(Debug, Clone, Default)]
pub struct RelationProfile<'a> {
    /// Objects reached through a structural predicate.
    pub strong: HashSet<&'a str>,
    /// Objects reached through any other predicate.
    pub weak: HashSet<&'a str>,
    /// Every object, regardless of predicate.
    pub objects: HashSet<&'a str>,
    /// Observers that recorded any of these relations.
    pub observers: HashSet<&'a str>,
    pub relation_count: usize,
}

impl<'a> RelationProfile<'a> {
    fn add(&mut self, m: &'a Measurement) {
        let object = m.object.as_str();
        if is_structural(&m.predicate) {
            self.strong.insert(object);
        } else {
            self.weak.insert(object);
        }
        self.objects.insert(object);
        self.observers.insert(m.observer.as_str());
        self.relation_count += 1;
    }

    /// Profile of `concept` built by scanning the whole log.
    pub fn build(concept: &str, measurements: &'a [Measurement]) -> Self {
        let mut profile = Self::default();
        for m in measurements.iter().filter(|m| m.subject == concept) {
            profile.add(m);
        }
        profile
    }

    pub fn is_empty(&self) -> bool {
        self.relation_count == 0
    }

    /// True if `concept` is the object of one of these relations.
    pub fn points_at(&self, concept: &str) -> bool {
        self.objects.contains(concept)
    }
}

/// Profiles for every subject in a log, built in one pass.
#[derive(Debug, Default)]
pub struct RelationIndex<'a> {
    profiles: HashMap<&'a str, RelationProfile<'a>>,
    /// Distinct subjects in first-seen order.
    subjects: Vec<&'a str>,
}

impl<'a> RelationIndex<'a> {
    pub fn build(measurements: &'a [Measurement]) -> Self {
        let mut profiles: HashMap<&'a str, RelationProfile<'a>> = HashMap::new();
        let mut subjects = Vec::new();
        for m in measurements {
            let subject = m.subject.as_str();
            if !profiles.contains_key(subject) {
                subjects.push(subject);
            }
            profiles.entry(subject).or_default().add(m);
        }
        Self { profiles, subjects }
    }

    pub fn profile(&self, concept: &str) -> Option<&RelationProfile<'a>> {
        self.profiles.get(concept)
    }

    /// Distinct subjects, in the order they first appear in the log.
    pub fn subjects(&self) -> &[&'a str] {
        &self.subjects
    }
}
