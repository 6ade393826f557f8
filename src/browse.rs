//! Cursor-based browsing.
//!
//! [`BrowseIter`] turns repeated page fetches into a single pull-based
//! sequence of records. It buffers one page at a time: a call returns a
//! buffered record without I/O, and only fetches when the buffer is
//! exhausted and the last page carried a continuation cursor.

use crate::models::{BrowseRes, Object, SearchParams};
use crate::transport::RequestOptions;
use crate::{Index, Result};

/// Page-fetch primitive backing a [`BrowseIter`].
///
/// Given the iterator's immutable parameters and a cursor (`None` for the
/// first page), returns one page of records plus the cursor of the next
/// page. The cursor is absent exactly when the fetched page is the last.
pub trait BrowsePages {
    /// Fetches one page.
    ///
    /// # Errors
    ///
    /// Returns an error on network, HTTP-status or decoding failures.
    fn browse_page(
        &self,
        params: &SearchParams,
        cursor: Option<&str>,
        opts: Option<&RequestOptions>,
    ) -> Result<BrowseRes>;
}

impl<T: BrowsePages + ?Sized> BrowsePages for &T {
    fn browse_page(
        &self,
        params: &SearchParams,
        cursor: Option<&str>,
        opts: Option<&RequestOptions>,
    ) -> Result<BrowseRes> {
        (**self).browse_page(params, cursor, opts)
    }
}

impl BrowsePages for Index {
    fn browse_page(
        &self,
        params: &SearchParams,
        cursor: Option<&str>,
        opts: Option<&RequestOptions>,
    ) -> Result<BrowseRes> {
        self.browse(params, cursor, opts)
    }
}

/// Pull-based iterator over every record matching a browse.
///
/// Created by [`Index::browse_all`]. Records are yielded in index order,
/// never reordered or deduplicated; each server cursor is consumed at most
/// once. The iterator holds no connection between calls, only the buffered
/// page and the last cursor.
///
/// End of sequence is a tagged outcome, not an error: [`try_next`] returns
/// `Ok(None)` once every page is exhausted, and the [`Iterator`] impl ends
/// with `None`. A fetch failure is propagated unchanged, aborts the
/// iteration, and leaves the iterator terminated: later calls report end of
/// sequence instead of retrying.
///
/// The iterator is a plain owned value; `&mut self` makes concurrent use a
/// compile error. Independent iterators are fully independent.
///
/// [`try_next`]: BrowseIter::try_next
#[derive(Debug)]
pub struct BrowseIter<S: BrowsePages> {
    source: S,
    params: SearchParams,
    opts: Option<RequestOptions>,
    buffered: std::vec::IntoIter<Object>,
    cursor: Option<String>,
    finished: bool,
}

impl<S: BrowsePages> BrowseIter<S> {
    /// Creates the iterator, performing the first fetch immediately.
    ///
    /// # Errors
    ///
    /// Returns the first fetch's error as-is.
    pub fn new(source: S, params: SearchParams, opts: Option<RequestOptions>) -> Result<Self> {
        let first = source.browse_page(&params, None, opts.as_ref())?;
        Ok(Self {
            source,
            params,
            opts,
            buffered: first.hits.into_iter(),
            cursor: first.cursor,
            finished: false,
        })
    }

    /// Returns the underlying page source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Produces the next record.
    ///
    /// Returns `Ok(Some(record))` while records remain and `Ok(None)` once
    /// the sequence is exhausted. An empty page that carries a cursor
    /// triggers an immediate follow-up fetch rather than a premature end:
    /// pagination boundaries do not guarantee non-empty intermediate pages.
    ///
    /// # Errors
    ///
    /// Returns the underlying fetch error unchanged. No retry is attempted;
    /// after an error the iterator only reports end of sequence.
    pub fn try_next(&mut self) -> Result<Option<Object>> {
        loop {
            if self.finished {
                return Ok(None);
            }
            if let Some(record) = self.buffered.next() {
                return Ok(Some(record));
            }
            let Some(cursor) = self.cursor.take() else {
                self.finished = true;
                return Ok(None);
            };
            let page = self
                .source
                .browse_page(&self.params, Some(&cursor), self.opts.as_ref())
                .inspect_err(|_| self.finished = true)?;
            self.buffered = page.hits.into_iter();
            self.cursor = page.cursor;
        }
    }
}

impl<S: BrowsePages> Iterator for BrowseIter<S> {
    type Item = Result<Object>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::cell::RefCell;

    /// Scripted page source; pops pages front to back.
    #[derive(Debug)]
    struct Script(RefCell<Vec<Result<BrowseRes>>>);

    impl Script {
        fn new(pages: Vec<Result<BrowseRes>>) -> Self {
            Self(RefCell::new(pages))
        }
    }

    impl BrowsePages for Script {
        fn browse_page(
            &self,
            _params: &SearchParams,
            _cursor: Option<&str>,
            _opts: Option<&RequestOptions>,
        ) -> Result<BrowseRes> {
            self.0.borrow_mut().remove(0)
        }
    }

    fn page(ids: &[u64], cursor: Option<&str>) -> Result<BrowseRes> {
        let hits = ids
            .iter()
            .map(|id| {
                let mut record = Object::new();
                record.insert("objectID".to_string(), serde_json::json!(id.to_string()));
                record
            })
            .collect();
        Ok(BrowseRes {
            hits,
            cursor: cursor.map(str::to_string),
            nb_hits: 0,
            processing_time_ms: 0,
        })
    }

    #[test]
    fn test_two_pages_in_order() {
        let script = Script::new(vec![page(&[1, 2], Some("c1")), page(&[3], None)]);
        let mut it = BrowseIter::new(script, SearchParams::new(), None).unwrap();

        for expected in ["1", "2", "3"] {
            let record = it.try_next().unwrap().unwrap();
            assert_eq!(record["objectID"], serde_json::json!(expected));
        }
        assert!(it.try_next().unwrap().is_none());
        // Exhaustion is stable and performs no further fetches
        assert!(it.try_next().unwrap().is_none());
    }

    #[test]
    fn test_empty_result_set() {
        let script = Script::new(vec![page(&[], None)]);
        let mut it = BrowseIter::new(script, SearchParams::new(), None).unwrap();
        assert!(it.try_next().unwrap().is_none());
    }

    #[test]
    fn test_construction_error_propagates() {
        let script = Script::new(vec![Err(Error::Api {
            status: 403,
            message: "Invalid API key".to_string(),
        })]);
        let err = BrowseIter::new(script, SearchParams::new(), None).unwrap_err();
        assert!(matches!(err, Error::Api { status: 403, .. }));
    }

    #[test]
    fn test_iterator_adapter_yields_none_at_end() {
        let script = Script::new(vec![page(&[1], None)]);
        let it = BrowseIter::new(script, SearchParams::new(), None).unwrap();
        let records: Result<Vec<_>> = it.collect();
        assert_eq!(records.unwrap().len(), 1);
    }
}
