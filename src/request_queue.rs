//! Rolling histogram of recent no-result queries, ported from
//! `original_source/search-server/request_queue.h`.
//!
//! The original measures elapsed time in minutes against a real clock; here
//! the "minute" is a synthetic tick that advances by one on every call to
//! `add_find_request`, which keeps the window deterministic and testable
//! without wall-clock dependence.

use std::collections::VecDeque;

use crate::constants::MIN_IN_DAY;
use crate::core::types::{Rating, Status};
use crate::error::SearchResult;
use crate::search::Document;
use crate::SearchIndex;

struct QueryRecord {
    tick: usize,
    had_results: bool,
}

/// Wraps a [`SearchIndex`] and tracks how many of the last [`MIN_IN_DAY`]
/// requests returned zero documents.
pub struct RequestQueue<'a> {
    index: &'a SearchIndex,
    history: VecDeque<QueryRecord>,
    empty_count: usize,
    tick: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(index: &'a SearchIndex) -> Self {
        RequestQueue {
            index,
            history: VecDeque::new(),
            empty_count: 0,
            tick: 0,
        }
    }

    fn record(&mut self, results: &[Document]) {
        self.tick += 1;
        let had_results = !results.is_empty();
        if !had_results {
            self.empty_count += 1;
        }
        self.history.push_back(QueryRecord { tick: self.tick, had_results });

        while let Some(front) = self.history.front() {
            if self.tick - front.tick >= MIN_IN_DAY {
                if !front.had_results {
                    self.empty_count -= 1;
                }
                self.history.pop_front();
            } else {
                break;
            }
        }
    }

    /// Default predicate: `Status::Actual` only.
    pub fn add_find_request(&mut self, query: &str) -> SearchResult<Vec<Document>> {
        let results = self.index.find_top_documents(query)?;
        self.record(&results);
        Ok(results)
    }

    pub fn add_find_request_with_status(
        &mut self,
        query: &str,
        status: Status,
    ) -> SearchResult<Vec<Document>> {
        let results = self.index.find_top_documents_with_status(query, status)?;
        self.record(&results);
        Ok(results)
    }

    pub fn add_find_request_by<P>(&mut self, query: &str, predicate: P) -> SearchResult<Vec<Document>>
    where
        P: Fn(crate::core::types::DocumentId, Status, Rating) -> bool,
    {
        let results = self.index.find_top_documents_by(query, predicate)?;
        self.record(&results);
        Ok(results)
    }

    /// How many of the last [`MIN_IN_DAY`] requests returned no documents.
    pub fn get_no_result_requests(&self) -> usize {
        self.empty_count
    }
}
