//! Intersection aggregator
//!
//! ANDs N completed scan result sets on record identity. Only the first
//! set's element order survives: later sets are reduced to presence maps and
//! used purely for membership tests. The caller's predicate construction
//! order therefore determines response order.

use std::collections::HashSet;

use crate::index::IndexRecord;

/// Presence map over record identities, built from one scan's result set.
pub struct IdentitySet(HashSet<String>);

impl IdentitySet {
    /// Collect the identities of one result set.
    pub fn from_records(records: &[IndexRecord]) -> Self {
        Self(records.iter().map(|r| r.identity.clone()).collect())
    }

    /// Membership test.
    pub fn contains(&self, identity: &str) -> bool {
        self.0.contains(identity)
    }

    /// Number of distinct identities.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Intersect result sets on identity, preserving the first set's order.
///
/// With a single set this is the identity. If any later set is empty the
/// output is empty; an empty intersection is never treated as "ignore this
/// predicate".
pub fn intersect(mut result_sets: Vec<Vec<IndexRecord>>) -> Vec<IndexRecord> {
    if result_sets.is_empty() {
        return Vec::new();
    }

    let first = result_sets.remove(0);
    let others: Vec<IdentitySet> = result_sets
        .iter()
        .map(|records| IdentitySet::from_records(records))
        .collect();

    first
        .into_iter()
        .filter(|record| others.iter().all(|set| set.contains(&record.identity)))
        .collect()
}
