//! Paginated scanner
//!
//! Runs one scan descriptor to completion, transparently following
//! continuation cursors. `RecordScan` is a pull-based iterator with explicit
//! buffer/cursor state: each page is fully drained before the next fetch, and
//! there is no look-ahead. A store error ends the sequence immediately.

use std::collections::VecDeque;

use crate::index::{IndexRecord, IndexStore, ScanCursor, ScanDescriptor, StoreResult};

/// Lazy, finite, non-restartable sequence of records for one descriptor.
pub struct RecordScan<'a, S: IndexStore> {
    store: &'a S,
    descriptor: ScanDescriptor,
    buffer: VecDeque<IndexRecord>,
    cursor: Option<ScanCursor>,
    more_pages: bool,
}

impl<'a, S: IndexStore> RecordScan<'a, S> {
    /// Start a scan. No store call is made until the first pull.
    pub fn new(store: &'a S, descriptor: ScanDescriptor) -> Self {
        Self {
            store,
            descriptor,
            buffer: VecDeque::new(),
            cursor: None,
            more_pages: true,
        }
    }

    /// The descriptor this scan executes.
    pub fn descriptor(&self) -> &ScanDescriptor {
        &self.descriptor
    }

    /// Run the scan to completion, aborting on the first store error.
    pub fn drain(self) -> StoreResult<Vec<IndexRecord>> {
        self.collect()
    }
}

impl<S: IndexStore> Iterator for RecordScan<'_, S> {
    type Item = StoreResult<IndexRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.buffer.pop_front() {
                return Some(Ok(record));
            }
            if !self.more_pages {
                return None;
            }
            match self.store.scan(&self.descriptor, self.cursor.as_ref()) {
                Ok(page) => {
                    self.buffer.extend(page.records);
                    self.more_pages = page.next_cursor.is_some();
                    self.cursor = page.next_cursor;
                }
                Err(err) => {
                    self.more_pages = false;
                    return Some(Err(err));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{ScanPage, SortKey, StoreError, CALL_PARTITION};
    use std::cell::{Cell, RefCell};

    /// Store that replays a scripted page sequence.
    struct ScriptedStore {
        pages: RefCell<VecDeque<StoreResult<ScanPage>>>,
        calls: Cell<usize>,
    }

    impl ScriptedStore {
        fn new(pages: Vec<StoreResult<ScanPage>>) -> Self {
            Self {
                pages: RefCell::new(pages.into()),
                calls: Cell::new(0),
            }
        }
    }

    impl IndexStore for ScriptedStore {
        fn scan(
            &self,
            _descriptor: &ScanDescriptor,
            _cursor: Option<&ScanCursor>,
        ) -> StoreResult<ScanPage> {
            self.calls.set(self.calls.get() + 1);
            self.pages
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(ScanPage::last(Vec::new())))
        }
    }

    fn record(identity: &str) -> IndexRecord {
        IndexRecord::new(identity, CALL_PARTITION, SortKey::number(0.0), "{}")
    }

    #[test]
    fn test_three_pages_concatenated_in_order() {
        let store = ScriptedStore::new(vec![
            Ok(ScanPage::partial(
                vec![record("a"), record("b")],
                ScanCursor::new("c1"),
            )),
            Ok(ScanPage::partial(vec![record("c")], ScanCursor::new("c2"))),
            Ok(ScanPage::last(vec![record("d"), record("e")])),
        ]);

        let scan = RecordScan::new(&store, ScanDescriptor::partition(CALL_PARTITION));
        let records = scan.drain().unwrap();

        let identities: Vec<&str> = records.iter().map(|r| r.identity.as_str()).collect();
        assert_eq!(identities, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(store.calls.get(), 3);
    }

    #[test]
    fn test_single_page_issues_one_call() {
        let store = ScriptedStore::new(vec![Ok(ScanPage::last(vec![record("only")]))]);
        let scan = RecordScan::new(&store, ScanDescriptor::partition(CALL_PARTITION));
        assert_eq!(scan.drain().unwrap().len(), 1);
        assert_eq!(store.calls.get(), 1);
    }

    #[test]
    fn test_empty_page_with_cursor_keeps_going() {
        let store = ScriptedStore::new(vec![
            Ok(ScanPage::partial(Vec::new(), ScanCursor::new("c1"))),
            Ok(ScanPage::last(vec![record("late")])),
        ]);
        let scan = RecordScan::new(&store, ScanDescriptor::partition(CALL_PARTITION));
        let records = scan.drain().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(store.calls.get(), 2);
    }

    #[test]
    fn test_error_aborts_sequence() {
        let store = ScriptedStore::new(vec![
            Ok(ScanPage::partial(vec![record("a")], ScanCursor::new("c1"))),
            Err(StoreError::scan_failed(CALL_PARTITION, "page read failed")),
        ]);

        let mut scan = RecordScan::new(&store, ScanDescriptor::partition(CALL_PARTITION));
        assert!(matches!(scan.next(), Some(Ok(_))));
        assert!(matches!(scan.next(), Some(Err(_))));
        // After an error the sequence is over, no further store calls.
        assert!(scan.next().is_none());
        assert_eq!(store.calls.get(), 2);
    }

    #[test]
    fn test_drain_propagates_error() {
        let store = ScriptedStore::new(vec![Err(StoreError::scan_failed(
            CALL_PARTITION,
            "unavailable",
        ))]);
        let scan = RecordScan::new(&store, ScanDescriptor::partition(CALL_PARTITION));
        assert!(scan.drain().is_err());
    }

    #[test]
    fn test_no_store_call_before_first_pull() {
        let store = ScriptedStore::new(vec![Ok(ScanPage::last(vec![record("a")]))]);
        let _scan = RecordScan::new(&store, ScanDescriptor::partition(CALL_PARTITION));
        assert_eq!(store.calls.get(), 0);
    }
}
