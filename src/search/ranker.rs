//! `FindTopDocuments`: rank live documents against a parsed query and return
//! the top [`MAX_RESULT_DOCUMENT_COUNT`] by relevance, then rating.

use rayon::prelude::*;

use crate::concurrency::ShardedMap;
use crate::constants::{MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};
use crate::core::types::{DocumentId, Rating, Status};
use crate::index::InvertedIndex;
use crate::query::ParsedQuery;
use crate::scoring::{inverse_document_frequency, term_contribution};

/// A single ranked hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Document {
    pub id: i64,
    pub relevance: f64,
    pub rating: Rating,
}

fn sort_and_truncate(mut docs: Vec<Document>) -> Vec<Document> {
    docs.sort_by(|a, b| {
        let relevance_order = b.relevance.total_cmp(&a.relevance);
        if relevance_order == std::cmp::Ordering::Equal
            || (a.relevance - b.relevance).abs() < RELEVANCE_EPSILON
        {
            b.rating.cmp(&a.rating)
        } else {
            relevance_order
        }
    });
    docs.truncate(MAX_RESULT_DOCUMENT_COUNT);
    docs
}

fn excluded_by_minus_term(index: &InvertedIndex, query: &ParsedQuery, id: DocumentId) -> bool {
    query.minus_terms.iter().any(|term| {
        index
            .reverse_row(term)
            .is_some_and(|row| row.contains_key(&id))
    })
}

/// Sequential ranking. `predicate` receives `(id, status, rating)` and
/// decides whether a document is eligible at all, independent of relevance.
pub fn find_top_documents<P>(index: &InvertedIndex, query: &ParsedQuery, predicate: P) -> Vec<Document>
where
    P: Fn(DocumentId, Status, Rating) -> bool,
{
    let mut scores = ShardedMap::new(query.plus_terms.len().max(1));
    let total_docs = index.document_count().max(1);

    for term in &query.plus_terms {
        let df = index.document_frequency(term);
        if df == 0 {
            continue;
        }
        let idf = inverse_document_frequency(total_docs, df);
        if let Some(row) = index.reverse_row(term) {
            for (&id, &tf) in row {
                scores.add(id, term_contribution(tf, idf));
            }
        }
    }

    let merged = scores.into_ordinary_map();
    let docs = merged
        .into_iter()
        .filter(|(id, _)| !excluded_by_minus_term(index, query, *id))
        .filter_map(|(id, relevance)| {
            let record = index.record(id)?;
            predicate(id, record.status, record.rating).then_some(Document {
                id: id.value(),
                relevance,
                rating: record.rating,
            })
        })
        .collect();

    sort_and_truncate(docs)
}

/// Parallel ranking: plus-term postings are scanned concurrently into a
/// [`ShardedMap`], then merged and sorted exactly as the sequential path does.
pub fn find_top_documents_parallel<P>(
    index: &InvertedIndex,
    query: &ParsedQuery,
    predicate: P,
) -> Vec<Document>
where
    P: Fn(DocumentId, Status, Rating) -> bool + Sync,
{
    let scores = ShardedMap::new(query.plus_terms.len().max(100));
    let total_docs = index.document_count().max(1);

    query.plus_terms.par_iter().for_each(|term| {
        let df = index.document_frequency(term);
        if df == 0 {
            return;
        }
        let idf = inverse_document_frequency(total_docs, df);
        if let Some(row) = index.reverse_row(term) {
            for (&id, &tf) in row {
                scores.add(id, term_contribution(tf, idf));
            }
        }
    });

    let merged = scores.into_ordinary_map();
    let docs = merged
        .into_iter()
        .filter(|(id, _)| !excluded_by_minus_term(index, query, *id))
        .filter_map(|(id, relevance)| {
            let record = index.record(id)?;
            predicate(id, record.status, record.rating).then_some(Document {
                id: id.value(),
                relevance,
                rating: record.rating,
            })
        })
        .collect();

    sort_and_truncate(docs)
}
