//! Sorted secondary index model
//!
//! Records, scan descriptors, the `IndexStore` client seam, and the fan-out
//! loader that denormalizes call documents into partition copies.
//!
//! # Invariants
//!
//! - One logical call fans out to multiple partition copies with a
//!   byte-identical payload
//! - Scans return records in reverse sort-key order within a partition
//! - Continuation cursors are opaque to callers

mod descriptor;
mod errors;
mod fanout;
mod record;
mod store;

pub use descriptor::{
    entity_partition, language_partition, sentiment_partition, ScanDescriptor, SortKeyCondition,
    CALL_PARTITION,
};
pub use errors::{StoreError, StoreResult};
pub use fanout::{CallDocument, SentimentSummary, SpeakerSentiment};
pub use record::{IndexRecord, SortKey};
pub use store::{IndexStore, MemoryIndexStore, ScanCursor, ScanPage, DEFAULT_PAGE_SIZE};
