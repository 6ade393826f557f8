//! Behavior of the browse iterator against a scripted page source.
//!
//! The fake below serves a fixed data set split into pages joined by
//! cursors, records every fetch it sees, and can fail a chosen fetch.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use algoliasearch::browse::{BrowseIter, BrowsePages};
use algoliasearch::models::{BrowseRes, Object, SearchParams};
use algoliasearch::transport::RequestOptions;
use algoliasearch::{Error, Result};
use std::cell::RefCell;

/// One pre-built page.
#[derive(Debug)]
struct Page {
    hits: Vec<Object>,
    cursor: Option<String>,
}

/// Fake page source serving pre-built pages.
#[derive(Debug)]
struct FakePages {
    pages: Vec<Page>,
    /// Cursors seen by `browse_page`, in call order.
    fetched_cursors: RefCell<Vec<Option<String>>>,
    /// 1-based fetch number that fails, if any.
    fail_on_fetch: Option<usize>,
}

impl FakePages {
    fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            fetched_cursors: RefCell::new(Vec::new()),
            fail_on_fetch: None,
        }
    }

    fn failing_on(mut self, fetch: usize) -> Self {
        self.fail_on_fetch = Some(fetch);
        self
    }

    fn fetch_count(&self) -> usize {
        self.fetched_cursors.borrow().len()
    }
}

impl BrowsePages for FakePages {
    fn browse_page(
        &self,
        _params: &SearchParams,
        cursor: Option<&str>,
        _opts: Option<&RequestOptions>,
    ) -> Result<BrowseRes> {
        let mut fetched = self.fetched_cursors.borrow_mut();
        fetched.push(cursor.map(str::to_string));

        if self.fail_on_fetch == Some(fetched.len()) {
            return Err(Error::Api {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }

        let page_no = cursor.map_or(0, |c| {
            c.strip_prefix("cursor-")
                .and_then(|n| n.parse::<usize>().ok())
                .expect("cursor issued by this fake")
        });
        let page = &self.pages[page_no];
        Ok(BrowseRes {
            hits: page.hits.clone(),
            cursor: page.cursor.clone(),
            nb_hits: 0,
            processing_time_ms: 0,
        })
    }
}

fn record(id: usize) -> Object {
    let mut object = Object::new();
    object.insert("objectID".to_string(), serde_json::json!(id.to_string()));
    object.insert("key".to_string(), serde_json::json!("value"));
    object
}

/// Splits `total` sequential records into pages of `page_size`, chaining
/// them with `cursor-N` tokens. The final page carries no cursor.
fn paginate(total: usize, page_size: usize) -> FakePages {
    let records: Vec<Object> = (0..total).map(record).collect();
    let chunks: Vec<Vec<Object>> = if records.is_empty() {
        vec![Vec::new()]
    } else {
        records.chunks(page_size).map(<[Object]>::to_vec).collect()
    };
    let last = chunks.len() - 1;
    let pages = chunks
        .into_iter()
        .enumerate()
        .map(|(i, hits)| Page {
            hits,
            cursor: (i < last).then(|| format!("cursor-{}", i + 1)),
        })
        .collect();
    FakePages::new(pages)
}

fn collect_ids(it: &mut BrowseIter<FakePages>) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    while let Some(rec) = it.try_next()? {
        ids.push(rec["objectID"].as_str().unwrap().to_string());
    }
    Ok(ids)
}

#[test]
fn yields_all_records_in_stored_order() {
    let source = paginate(7, 3);
    let mut it = BrowseIter::new(source, SearchParams::new(), None).unwrap();

    let ids = collect_ids(&mut it).unwrap();
    let expected: Vec<String> = (0..7).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);

    // Exhaustion is stable
    assert!(it.try_next().unwrap().is_none());
}

#[test]
fn each_cursor_is_used_at_most_once() {
    let source = paginate(9, 2);
    let mut it = BrowseIter::new(source, SearchParams::new(), None).unwrap();
    collect_ids(&mut it).unwrap();
    // Draining past the end must not trigger extra fetches
    assert!(it.try_next().unwrap().is_none());

    let fetched = it.source().fetched_cursors.borrow().clone();
    assert_eq!(fetched.len(), 5);
    assert_eq!(fetched[0], None);
    let mut cursors: Vec<_> = fetched.iter().flatten().collect();
    cursors.sort();
    cursors.dedup();
    assert_eq!(cursors.len(), 4, "a cursor was fetched twice");
}

#[test]
fn empty_result_set_ends_immediately() {
    let source = paginate(0, 1000);
    let mut it = BrowseIter::new(source, SearchParams::new(), None).unwrap();
    assert!(it.try_next().unwrap().is_none());
}

#[test]
fn count_divisible_by_page_size_has_no_off_by_one() {
    // 6 records in pages of 3: the second page is the last and carries no
    // cursor, so exactly two fetches happen and exhaustion comes right
    // after record 5.
    let source = paginate(6, 3);
    let mut it = BrowseIter::new(source, SearchParams::new(), None).unwrap();

    let ids = collect_ids(&mut it).unwrap();
    assert_eq!(ids.len(), 6);
    assert_eq!(ids.last().map(String::as_str), Some("5"));
    assert_eq!(it.source().fetch_count(), 2);
}

#[test]
fn empty_middle_page_with_cursor_is_skipped() {
    let pages = vec![
        Page {
            hits: (0..3).map(record).collect(),
            cursor: Some("cursor-1".to_string()),
        },
        Page {
            hits: Vec::new(),
            cursor: Some("cursor-2".to_string()),
        },
        Page {
            hits: (3..5).map(record).collect(),
            cursor: None,
        },
    ];
    let mut it = BrowseIter::new(FakePages::new(pages), SearchParams::new(), None).unwrap();

    let ids = collect_ids(&mut it).unwrap();
    let expected: Vec<String> = (0..5).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn failure_on_third_page_is_propagated_unchanged() {
    let source = paginate(10, 2).failing_on(3);
    let mut it = BrowseIter::new(source, SearchParams::new(), None).unwrap();

    let mut ids = Vec::new();
    let err = loop {
        match it.try_next() {
            Ok(Some(rec)) => ids.push(rec["objectID"].as_str().unwrap().to_string()),
            Ok(None) => panic!("exhaustion must not replace the error"),
            Err(err) => break err,
        }
    };

    // The first two pages came through intact
    let expected: Vec<String> = (0..4).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
    assert!(matches!(err, Error::Api { status: 500, .. }));

    // After the error the iterator is terminated, not retrying
    assert!(it.try_next().unwrap().is_none());
}

#[test]
fn construction_propagates_first_fetch_failure() {
    let source = paginate(10, 2).failing_on(1);
    let err = BrowseIter::new(source, SearchParams::new(), None).unwrap_err();
    assert!(matches!(err, Error::Api { status: 500, .. }));
}

#[test]
fn browses_3501_records_with_default_page_size() {
    let source = paginate(3501, 1000);
    let mut it = BrowseIter::new(source, SearchParams::new(), None).unwrap();

    let mut count = 0usize;
    while it.try_next().unwrap().is_some() {
        count += 1;
    }
    assert_eq!(count, 3501);
    assert!(it.try_next().unwrap().is_none());
}

#[test]
fn iterator_adapter_matches_try_next() {
    let source = paginate(5, 2);
    let it = BrowseIter::new(source, SearchParams::new(), None).unwrap();

    let records: Result<Vec<Object>> = it.collect();
    assert_eq!(records.unwrap().len(), 5);
}

#[test]
fn fetches_happen_only_at_page_boundaries() {
    let source = paginate(4, 2);
    let mut it = BrowseIter::new(source, SearchParams::new(), None).unwrap();
    assert_eq!(it.source().fetch_count(), 1);

    it.try_next().unwrap();
    it.try_next().unwrap();
    // Still inside the first page
    assert_eq!(it.source().fetch_count(), 1);

    it.try_next().unwrap();
    assert_eq!(it.source().fetch_count(), 2);
}
