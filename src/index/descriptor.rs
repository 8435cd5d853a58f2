//! Scan descriptors
//!
//! A `ScanDescriptor` is the unit of work handed to the store: one partition,
//! an optional sort-key range condition, and an optional payload containment
//! filter evaluated store-side during the scan. Descriptors are independent
//! of each other; each is consumed by exactly one scan.

use super::record::{IndexRecord, SortKey};

/// Partition holding the primary copy of every call record.
pub const CALL_PARTITION: &str = "call";

/// Partition holding copies tagged with a named entity.
pub fn entity_partition(tag: &str) -> String {
    format!("entity#{}", tag)
}

/// Partition holding copies for one language code.
pub fn language_partition(code: &str) -> String {
    format!("language#{}", code)
}

/// Partition holding copies keyed by one speaker's sentiment metric.
pub fn sentiment_partition(who: &str, what: &str) -> String {
    format!("sentiment#{}#{}", who, what)
}

/// Range condition over the sort key, inclusive unless noted.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKeyCondition {
    /// `sort_key >= bound`
    AtLeast(SortKey),
    /// `sort_key <= bound`
    AtMost(SortKey),
    /// `lower <= sort_key <= upper`
    Between(SortKey, SortKey),
    /// `sort_key < bound` (exclusive)
    Below(SortKey),
}

impl SortKeyCondition {
    /// Check whether a sort key satisfies this condition.
    pub fn matches(&self, key: &SortKey) -> bool {
        match self {
            SortKeyCondition::AtLeast(bound) => key >= bound,
            SortKeyCondition::AtMost(bound) => key <= bound,
            SortKeyCondition::Between(lower, upper) => key >= lower && key <= upper,
            SortKeyCondition::Below(bound) => key < bound,
        }
    }
}

/// One scan against the sorted index.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanDescriptor {
    /// Partition key literal
    pub partition: String,
    /// Optional range condition over the sort key
    pub condition: Option<SortKeyCondition>,
    /// Optional substring filter over the payload, applied during the scan
    pub payload_contains: Option<String>,
}

impl ScanDescriptor {
    /// Equality scan over a whole partition.
    pub fn partition(partition: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            condition: None,
            payload_contains: None,
        }
    }

    /// Range scan over a partition.
    pub fn range(partition: impl Into<String>, condition: SortKeyCondition) -> Self {
        Self {
            partition: partition.into(),
            condition: Some(condition),
            payload_contains: None,
        }
    }

    /// Attach a payload containment filter.
    pub fn containing(mut self, needle: impl Into<String>) -> Self {
        self.payload_contains = Some(needle.into());
        self
    }

    /// Check whether a record from this descriptor's partition matches the
    /// condition and containment filter.
    pub fn matches(&self, record: &IndexRecord) -> bool {
        if let Some(condition) = &self.condition {
            if !condition.matches(&record.sort_key) {
                return false;
            }
        }
        if let Some(needle) = &self.payload_contains {
            if !record.payload.contains(needle.as_str()) {
                return false;
            }
        }
        true
    }
}
