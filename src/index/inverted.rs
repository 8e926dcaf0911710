//! The dual-indexed inverted index: doc → term → tf and term → doc → tf.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use crate::analysis::stopwords::StopWords;
use crate::analysis::tokenizer::{contains_control_byte, split_into_words};
use crate::core::types::{compute_average_rating, DocumentId, DocumentRecord, Status};
use crate::error::{SearchError, SearchResult};
use crate::index::intern::TermPool;

/// A document's non-stop terms mapped to their relative frequency (tf).
pub type TermFrequencies = HashMap<Arc<str>, f64>;

/// Forward and reverse postings for every live document, plus the term
/// interning pool backing both.
#[derive(Default)]
pub struct InvertedIndex {
    pool: TermPool,
    reverse: HashMap<Arc<str>, BTreeMap<DocumentId, f64>>,
    forward: HashMap<DocumentId, TermFrequencies>,
    records: HashMap<DocumentId, DocumentRecord>,
    active: BTreeSet<DocumentId>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    pub fn document_count(&self) -> usize {
        self.active.len()
    }

    /// Ascending iteration over the currently live document ids.
    pub fn active_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.active.iter().copied()
    }

    pub fn is_active(&self, id: DocumentId) -> bool {
        self.active.contains(&id)
    }

    pub fn record(&self, id: DocumentId) -> Option<&DocumentRecord> {
        self.records.get(&id)
    }

    /// Document frequency of `term`: the number of live documents containing it.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.reverse.get(term).map_or(0, BTreeMap::len)
    }

    /// The term → tf row for `term` across all documents containing it.
    pub fn reverse_row(&self, term: &str) -> Option<&BTreeMap<DocumentId, f64>> {
        self.reverse.get(term)
    }

    /// A clone of `forward[id]`, or an empty map if `id` is not active.
    /// Cloning is cheap: values are `f64` and keys are `Arc<str>` refcount
    /// bumps, so the returned map owns its own references and stays valid
    /// even if the index is mutated afterward.
    pub fn word_frequencies(&self, id: DocumentId) -> TermFrequencies {
        self.forward.get(&id).cloned().unwrap_or_default()
    }

    /// Insert a new document. Fully validates before mutating: a failed call
    /// leaves the index exactly as it was.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: Status,
        ratings: &[i64],
        stop_words: &StopWords,
    ) -> SearchResult<()> {
        if id.value() < 0 {
            return Err(SearchError::InvalidInput(format!(
                "document id {id} must be non-negative"
            )));
        }
        if self.active.contains(&id) {
            return Err(SearchError::InvalidInput(format!("document id {id} already exists")));
        }
        if contains_control_byte(text) {
            return Err(SearchError::InvalidInput(
                "document text contains a control byte".to_string(),
            ));
        }

        let surviving: Vec<&str> = split_into_words(text)
            .into_iter()
            .filter(|w| !stop_words.contains(w))
            .collect();
        if surviving.is_empty() {
            return Err(SearchError::InvalidInput(format!(
                "document {id} has no non-stop-word tokens"
            )));
        }

        let inv_count = 1.0 / surviving.len() as f64;
        let mut forward_row: TermFrequencies = HashMap::new();
        for word in &surviving {
            let term = self.pool.intern(word);
            *forward_row.entry(term).or_insert(0.0) += inv_count;
        }

        for (term, tf) in &forward_row {
            self.reverse
                .entry(Arc::clone(term))
                .or_default()
                .insert(id, *tf);
        }

        let rating = compute_average_rating(ratings);
        self.forward.insert(id, forward_row);
        self.records.insert(id, DocumentRecord { rating, status });
        self.active.insert(id);

        Ok(())
    }

    /// Remove a live document, pruning any term whose reverse row and
    /// intern-pool entry this was the last reference to.
    pub fn remove_document(&mut self, id: DocumentId) -> SearchResult<()> {
        if !self.active.contains(&id) {
            return Err(SearchError::NotFound(format!("document id {id} is not active")));
        }

        if let Some(forward_row) = self.forward.remove(&id) {
            for term in forward_row.keys() {
                let now_empty = match self.reverse.get_mut(term.as_ref()) {
                    Some(row) => {
                        row.remove(&id);
                        row.is_empty()
                    }
                    None => false,
                };
                if now_empty {
                    self.reverse.remove(term.as_ref());
                    self.pool.release(term.as_ref());
                }
            }
        }

        self.records.remove(&id);
        self.active.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(words: &str) -> StopWords {
        StopWords::from_text(words).unwrap()
    }

    #[test]
    fn add_document_splits_tf_evenly() {
        let mut idx = InvertedIndex::new();
        idx.add_document(DocumentId(1), "cat city cat", Status::Actual, &[], &stop(""))
            .unwrap();
        let freqs = idx.word_frequencies(DocumentId(1));
        assert!((freqs[&Arc::from("cat")] - 2.0 / 3.0).abs() < 1e-9);
        assert!((freqs[&Arc::from("city")] - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn forward_row_sums_to_one() {
        let mut idx = InvertedIndex::new();
        idx.add_document(DocumentId(1), "cat in the city", Status::Actual, &[1, 2, 3], &stop("in the"))
            .unwrap();
        let total: f64 = idx.word_frequencies(DocumentId(1)).values().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_negative_id() {
        let mut idx = InvertedIndex::new();
        let err = idx
            .add_document(DocumentId(-1), "cat", Status::Actual, &[], &stop(""))
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidInput(_)));
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut idx = InvertedIndex::new();
        idx.add_document(DocumentId(1), "cat", Status::Actual, &[], &stop(""))
            .unwrap();
        let err = idx
            .add_document(DocumentId(1), "dog", Status::Actual, &[], &stop(""))
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidInput(_)));
    }

    #[test]
    fn rejects_control_byte_in_text() {
        let mut idx = InvertedIndex::new();
        let err = idx
            .add_document(DocumentId(1), "cat\u{0}dog", Status::Actual, &[], &stop(""))
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidInput(_)));
    }

    #[test]
    fn rejects_all_stop_word_document() {
        let mut idx = InvertedIndex::new();
        let err = idx
            .add_document(DocumentId(1), "in the", Status::Actual, &[], &stop("in the"))
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidInput(_)));
    }

    #[test]
    fn remove_unknown_id_is_not_found() {
        let mut idx = InvertedIndex::new();
        let err = idx.remove_document(DocumentId(42)).unwrap_err();
        assert!(matches!(err, SearchError::NotFound(_)));
    }

    #[test]
    fn remove_prunes_empty_reverse_rows_and_pool_entries() {
        let mut idx = InvertedIndex::new();
        idx.add_document(DocumentId(1), "cat", Status::Actual, &[], &stop(""))
            .unwrap();
        assert_eq!(idx.document_frequency("cat"), 1);
        idx.remove_document(DocumentId(1)).unwrap();
        assert_eq!(idx.document_frequency("cat"), 0);
        assert!(idx.reverse_row("cat").is_none());
        assert!(idx.pool.is_empty());
    }

    #[test]
    fn add_then_remove_restores_prior_state() {
        let mut idx = InvertedIndex::new();
        idx.add_document(DocumentId(1), "cat city", Status::Actual, &[1], &stop(""))
            .unwrap();
        let before = idx.document_count();
        idx.add_document(DocumentId(2), "dog city", Status::Actual, &[2], &stop(""))
            .unwrap();
        idx.remove_document(DocumentId(2)).unwrap();
        assert_eq!(idx.document_count(), before);
        assert!(!idx.is_active(DocumentId(2)));
    }

    #[test]
    fn active_ids_are_ascending() {
        let mut idx = InvertedIndex::new();
        for id in [5, 1, 3] {
            idx.add_document(DocumentId(id), "word", Status::Actual, &[], &stop(""))
                .unwrap();
        }
        let ids: Vec<i64> = idx.active_ids().map(|d| d.value()).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }
}
