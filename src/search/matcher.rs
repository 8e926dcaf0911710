//! `MatchDocument`: which plus terms of a query appear in one specific live
//! document, or none at all if a minus term is present.

use rayon::prelude::*;

use crate::core::types::{DocumentId, Status};
use crate::error::{SearchError, SearchResult};
use crate::index::InvertedIndex;
use crate::query::ParsedQuery;

/// Sequential match: returns the sorted, deduplicated plus terms shared with
/// `id`'s text, or an empty vector if any minus term is present.
pub fn match_document(
    index: &InvertedIndex,
    query: &ParsedQuery,
    id: DocumentId,
) -> SearchResult<(Vec<String>, Status)> {
    let record = index
        .record(id)
        .ok_or_else(|| SearchError::NotFound(format!("document id {id} is not active")))?;

    let words = index.word_frequencies(id);

    let has_minus_term = query.minus_terms.iter().any(|term| words.contains_key(term.as_str()));
    if has_minus_term {
        return Ok((Vec::new(), record.status));
    }

    let mut matched: Vec<String> = query
        .plus_terms
        .iter()
        .filter(|term| words.contains_key(term.as_str()))
        .cloned()
        .collect();
    matched.sort();
    matched.dedup();
    Ok((matched, record.status))
}

/// Parallel variant: plus terms are tested concurrently. Correctness is
/// identical to the sequential path; this only helps for queries with many
/// terms against a single document's word set.
pub fn match_document_parallel(
    index: &InvertedIndex,
    query: &ParsedQuery,
    id: DocumentId,
) -> SearchResult<(Vec<String>, Status)> {
    let record = index
        .record(id)
        .ok_or_else(|| SearchError::NotFound(format!("document id {id} is not active")))?;

    let words = index.word_frequencies(id);

    let has_minus_term = query
        .minus_terms
        .par_iter()
        .any(|term| words.contains_key(term.as_str()));
    if has_minus_term {
        return Ok((Vec::new(), record.status));
    }

    let mut matched: Vec<String> = query
        .plus_terms
        .par_iter()
        .filter(|term| words.contains_key(term.as_str()))
        .cloned()
        .collect();
    matched.sort();
    matched.dedup();
    Ok((matched, record.status))
}
