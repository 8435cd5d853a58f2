//! Search engine
//!
//! Orchestrates one request: build descriptors, run each scan to completion
//! in construction order, intersect on identity, decode the survivors. Scans
//! run strictly sequentially; each result set is private to the request, so
//! no locking is involved.

use serde_json::Value;

use crate::index::IndexStore;
use crate::observability::{Logger, Severity};

use super::errors::SearchResult;
use super::intersect::intersect;
use super::materialize::materialize;
use super::params::SearchParams;
use super::predicate::build_descriptors;
use super::scanner::RecordScan;

/// Conjunctive multi-predicate search over a sorted secondary index.
///
/// The store client is injected by the caller and borrowed for the engine's
/// lifetime; constructing one engine per request is cheap.
pub struct SearchEngine<'a, S: IndexStore> {
    store: &'a S,
}

impl<'a, S: IndexStore> SearchEngine<'a, S> {
    /// Create an engine over a store client.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Execute one search request.
    ///
    /// An empty predicate set short-circuits to an empty body without
    /// touching the store. Any scan or decode failure aborts the request;
    /// records fetched before the failure are discarded.
    pub fn search(&self, params: &SearchParams) -> SearchResult<Vec<Value>> {
        let descriptors = build_descriptors(params);
        if descriptors.is_empty() {
            return Ok(Vec::new());
        }

        let mut result_sets = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let partition = descriptor.partition.clone();
            let records = RecordScan::new(self.store, descriptor).drain()?;
            Logger::log(
                Severity::Info,
                "scan_complete",
                &[
                    ("partition", partition.as_str()),
                    ("records", &records.len().to_string()),
                ],
            );
            result_sets.push(records);
        }

        materialize(intersect(result_sets))
    }
}
