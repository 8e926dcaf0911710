//! Plain TF-IDF scoring: no BM25, no length normalization beyond the tf
//! already stored in the inverted index.

/// `IDF(t) = ln(N / df(t))`. Callers must only invoke this for terms with
/// `df(t) > 0` (absent terms contribute nothing and are skipped upstream).
pub fn inverse_document_frequency(total_docs: usize, document_frequency: usize) -> f64 {
    debug_assert!(document_frequency > 0, "idf is undefined for an absent term");
    (total_docs as f64 / document_frequency as f64).ln()
}

/// A single plus-term's contribution to a document's relevance: `tf * idf`.
pub fn term_contribution(term_frequency: f64, idf: f64) -> f64 {
    term_frequency * idf
}
