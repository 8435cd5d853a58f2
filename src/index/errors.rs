//! # Store Errors
//!
//! Error types for the sorted-index store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level read errors.
///
/// A store error during any page of any scan aborts the whole request; there
/// is no retry at this layer.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A scan page could not be read
    #[error("scan failed on partition {partition}: {reason}")]
    ScanFailed { partition: String, reason: String },

    /// The continuation cursor was not produced by this store
    #[error("invalid continuation cursor: {0}")]
    InvalidCursor(String),
}

impl StoreError {
    /// Create a scan failure for a partition
    pub fn scan_failed(partition: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::ScanFailed {
            partition: partition.into(),
            reason: reason.into(),
        }
    }
}
