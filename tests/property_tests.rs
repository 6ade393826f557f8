//! Property-based tests for the browse iterator.
//!
//! Uses proptest to verify invariants across random page partitions:
//! - Iteration yields exactly the stored sequence, whatever the page sizes
//! - Empty intermediate pages never end the iteration early
//! - The number of fetches equals the number of pages

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use algoliasearch::browse::{BrowseIter, BrowsePages};
use algoliasearch::models::{BrowseRes, Object, SearchParams};
use algoliasearch::transport::RequestOptions;
use algoliasearch::Result;
use proptest::prelude::*;
use std::cell::RefCell;

/// Page source replaying an arbitrary partition of sequential records.
struct PartitionedPages {
    pages: Vec<Vec<Object>>,
    fetches: RefCell<usize>,
}

impl PartitionedPages {
    fn new(pages: Vec<Vec<Object>>) -> Self {
        Self {
            pages,
            fetches: RefCell::new(0),
        }
    }
}

impl BrowsePages for PartitionedPages {
    fn browse_page(
        &self,
        _params: &SearchParams,
        cursor: Option<&str>,
        _opts: Option<&RequestOptions>,
    ) -> Result<BrowseRes> {
        *self.fetches.borrow_mut() += 1;
        let page_no = cursor.map_or(0, |c| c.parse::<usize>().expect("cursor from this fake"));
        let next = (page_no + 1 < self.pages.len()).then(|| (page_no + 1).to_string());
        Ok(BrowseRes {
            hits: self.pages[page_no].clone(),
            cursor: next,
            nb_hits: 0,
            processing_time_ms: 0,
        })
    }
}

fn record(id: usize) -> Object {
    let mut object = Object::new();
    object.insert("objectID".to_string(), serde_json::json!(id.to_string()));
    object
}

/// Splits sequential records according to `sizes`; sizes may be zero,
/// producing empty intermediate pages.
fn partition(sizes: &[usize]) -> (Vec<Vec<Object>>, usize) {
    let mut next_id = 0usize;
    let mut pages = Vec::with_capacity(sizes.len());
    for &size in sizes {
        pages.push((next_id..next_id + size).map(record).collect());
        next_id += size;
    }
    (pages, next_id)
}

proptest! {
    /// Property: iteration yields exactly the stored sequence for any
    /// partition into pages, including empty intermediate pages.
    #[test]
    fn prop_iteration_preserves_sequence(sizes in prop::collection::vec(0usize..8, 1..12)) {
        let (pages, total) = partition(&sizes);
        let source = PartitionedPages::new(pages);
        let mut it = BrowseIter::new(source, SearchParams::new(), None).unwrap();

        let mut seen = Vec::new();
        while let Some(rec) = it.try_next().unwrap() {
            seen.push(rec["objectID"].as_str().unwrap().to_string());
        }

        let expected: Vec<String> = (0..total).map(|i| i.to_string()).collect();
        prop_assert_eq!(seen, expected);
        prop_assert!(it.try_next().unwrap().is_none());
    }

    /// Property: one fetch per page, regardless of page sizes.
    #[test]
    fn prop_one_fetch_per_page(sizes in prop::collection::vec(0usize..8, 1..12)) {
        let page_count = sizes.len();
        let (pages, _) = partition(&sizes);
        let source = PartitionedPages::new(pages);
        let mut it = BrowseIter::new(source, SearchParams::new(), None).unwrap();

        while it.try_next().unwrap().is_some() {}
        prop_assert_eq!(*it.source().fetches.borrow(), page_count);
    }

    /// Property: the `Iterator` adapter agrees with `try_next`.
    #[test]
    fn prop_iterator_adapter_agrees(sizes in prop::collection::vec(0usize..5, 1..8)) {
        let (pages, total) = partition(&sizes);
        let source = PartitionedPages::new(pages);
        let it = BrowseIter::new(source, SearchParams::new(), None).unwrap();

        let collected: Result<Vec<Object>> = it.collect();
        prop_assert_eq!(collected.unwrap().len(), total);
    }
}
