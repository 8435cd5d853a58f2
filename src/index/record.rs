//! Index record and sort-key types
//!
//! An `IndexRecord` is one partition copy of a logical entity. The same
//! identity appears under several partitions (fan-out), always carrying a
//! byte-identical payload.

use std::fmt;

/// Within-partition ordering value.
///
/// Numbers are stored as order-preserving bit patterns so that `Ord` gives
/// correct numeric ordering including negatives. Numeric keys sort before
/// text keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    /// Numeric value (f64 bits rewritten for total ordering)
    Number(u64),
    /// Text value
    Text(String),
}

impl SortKey {
    /// Create a numeric sort key.
    pub fn number(v: f64) -> Self {
        let bits = v.to_bits();
        let ordered = if (bits >> 63) == 1 {
            !bits // negative: flip all bits
        } else {
            bits ^ (1 << 63) // positive: flip sign bit
        };
        SortKey::Number(ordered)
    }

    /// Create a text sort key.
    pub fn text(v: impl Into<String>) -> Self {
        SortKey::Text(v.into())
    }

    /// Recover the numeric value, if this is a numeric key.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SortKey::Number(ordered) => {
                let bits = if (ordered >> 63) == 1 {
                    ordered ^ (1 << 63)
                } else {
                    !ordered
                };
                Some(f64::from_bits(bits))
            }
            SortKey::Text(_) => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Number(_) => match self.as_f64() {
                Some(v) => write!(f, "{}", v),
                None => write!(f, "?"),
            },
            SortKey::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One row of the sorted secondary index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRecord {
    /// Primary identity of the underlying entity, stable across partitions
    pub identity: String,
    /// Partition this copy lives under (e.g. `call`, `entity#billing`)
    pub partition: String,
    /// Within-partition ordering value
    pub sort_key: SortKey,
    /// Serialized entity body, identical across all copies of one identity
    pub payload: String,
}

impl IndexRecord {
    /// Creates a record.
    pub fn new(
        identity: impl Into<String>,
        partition: impl Into<String>,
        sort_key: SortKey,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            partition: partition.into(),
            sort_key,
            payload: payload.into(),
        }
    }
}
