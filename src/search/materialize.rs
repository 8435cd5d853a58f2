//! Result materializer
//!
//! Decodes surviving records' payloads into structured values. A malformed
//! payload is fatal for the whole request, not skipped.

use serde_json::Value;

use crate::index::IndexRecord;

use super::errors::{SearchError, SearchResult};

/// Decode each record's payload, in order.
pub fn materialize(records: Vec<IndexRecord>) -> SearchResult<Vec<Value>> {
    records
        .into_iter()
        .map(|record| {
            serde_json::from_str(&record.payload).map_err(|source| SearchError::Decode {
                identity: record.identity,
                source,
            })
        })
        .collect()
}
