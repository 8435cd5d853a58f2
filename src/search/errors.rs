//! # Search Errors
//!
//! Failures surfaced by the search core. Both variants abort the whole
//! request; nothing is downgraded to a partial or empty result.

use thiserror::Error;

use crate::index::StoreError;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Search core errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// A store read failed during some page of some scan
    #[error(transparent)]
    Scan(#[from] StoreError),

    /// A surviving record's payload could not be decoded
    #[error("malformed payload for record {identity}: {source}")]
    Decode {
        identity: String,
        #[source]
        source: serde_json::Error,
    },
}
