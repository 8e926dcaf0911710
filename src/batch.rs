//! Batch query processing, ported from
//! `original_source/search-server/process_queries.cpp`.

use rayon::prelude::*;

use crate::core::types::Status;
use crate::error::SearchResult;
use crate::search::Document;
use crate::SearchIndex;

/// Run every query in `queries` against `index` in parallel, preserving
/// input order: `result[i]` is the ranked hits for `queries[i]`. The first
/// query that fails to parse aborts the whole batch with its error, mirroring
/// the way the original's `FindTopDocuments` exceptions propagate out of
/// `std::transform`.
pub fn process_queries(index: &SearchIndex, queries: &[String]) -> SearchResult<Vec<Vec<Document>>> {
    index.run_parallel(|| {
        queries
            .par_iter()
            .map(|query| index.find_top_documents_with_status(query, Status::Actual))
            .collect()
    })
}

/// Like [`process_queries`], but flattens the per-query result lists into one
/// stream, preserving each query's internal relevance ordering and the
/// queries' own input order.
pub fn process_queries_joined(index: &SearchIndex, queries: &[String]) -> SearchResult<Vec<Document>> {
    Ok(process_queries(index, queries)?.into_iter().flatten().collect())
}
