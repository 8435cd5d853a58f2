//! Sorted-index store client seam
//!
//! `IndexStore` is the injected dependency the search core scans against.
//! One call returns one page of records plus an optional continuation
//! cursor; reads are read-committed, not linearizable across partitions.
//!
//! `MemoryIndexStore` is the shipped in-memory implementation. In production
//! deployments a remote store client implements the same trait.

use std::collections::HashMap;
use std::sync::RwLock;

use super::descriptor::ScanDescriptor;
use super::errors::{StoreError, StoreResult};
use super::record::IndexRecord;

/// Default number of records per page for the in-memory store.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Opaque continuation token.
///
/// Produced by a store when a scan has more pages; passed back verbatim on
/// the next call. Callers must not interpret its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCursor(String);

impl ScanCursor {
    /// Wrap a store-produced token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of scan output.
#[derive(Debug, Clone)]
pub struct ScanPage {
    /// Matching records, in reverse sort-key order within the partition
    pub records: Vec<IndexRecord>,
    /// Continuation cursor when more pages remain
    pub next_cursor: Option<ScanCursor>,
}

impl ScanPage {
    /// Final page with no continuation.
    pub fn last(records: Vec<IndexRecord>) -> Self {
        Self {
            records,
            next_cursor: None,
        }
    }

    /// Page followed by more.
    pub fn partial(records: Vec<IndexRecord>, next_cursor: ScanCursor) -> Self {
        Self {
            records,
            next_cursor: Some(next_cursor),
        }
    }
}

/// Client for the sorted secondary index.
///
/// Within one partition, pages are returned in reverse sort-key order
/// (highest sort key first). Retry policy, if any, lives behind this trait.
pub trait IndexStore {
    /// Read one page for a descriptor, continuing from `cursor` if given.
    fn scan(&self, descriptor: &ScanDescriptor, cursor: Option<&ScanCursor>)
        -> StoreResult<ScanPage>;
}

/// In-memory index store.
///
/// Holds each partition's records sorted by descending sort key and pages
/// through them with offset-encoded cursors. Used by the CLI and as the
/// substitutable test double behind the `IndexStore` seam.
#[derive(Debug)]
pub struct MemoryIndexStore {
    partitions: RwLock<HashMap<String, Vec<IndexRecord>>>,
    page_size: usize,
}

impl MemoryIndexStore {
    /// Create an empty store with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create an empty store with an explicit page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            partitions: RwLock::new(HashMap::new()),
            page_size: page_size.max(1),
        }
    }

    /// Insert one record, keeping the partition in reverse sort-key order.
    pub fn insert(&self, record: IndexRecord) {
        let mut partitions = match self.partitions.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let records = partitions.entry(record.partition.clone()).or_default();
        let pos = records
            .binary_search_by(|probe| record.sort_key.cmp(&probe.sort_key))
            .unwrap_or_else(|pos| pos);
        records.insert(pos, record);
    }

    /// Insert many records.
    pub fn extend(&self, records: impl IntoIterator<Item = IndexRecord>) {
        for record in records {
            self.insert(record);
        }
    }

    /// Number of records across all partitions.
    pub fn len(&self) -> usize {
        match self.partitions.read() {
            Ok(guard) => guard.values().map(|v| v.len()).sum(),
            Err(_) => 0,
        }
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryIndexStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexStore for MemoryIndexStore {
    fn scan(
        &self,
        descriptor: &ScanDescriptor,
        cursor: Option<&ScanCursor>,
    ) -> StoreResult<ScanPage> {
        let offset = match cursor {
            Some(cursor) => cursor
                .as_str()
                .parse::<usize>()
                .map_err(|_| StoreError::InvalidCursor(cursor.as_str().to_string()))?,
            None => 0,
        };

        let partitions = self
            .partitions
            .read()
            .map_err(|_| StoreError::scan_failed(&descriptor.partition, "lock poisoned"))?;

        let matching: Vec<IndexRecord> = partitions
            .get(&descriptor.partition)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| descriptor.matches(r))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let end = (offset + self.page_size).min(matching.len());
        let records = matching
            .get(offset..end)
            .map(<[IndexRecord]>::to_vec)
            .unwrap_or_default();

        if end < matching.len() {
            Ok(ScanPage::partial(records, ScanCursor::new(end.to_string())))
        } else {
            Ok(ScanPage::last(records))
        }
    }
}
