//! Error surface for the search index.

/// Errors raised by [`crate::SearchIndex`] and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Malformed input: a control byte in a document or query, a malformed
    /// minus term, a duplicate or negative document id, or invalid stop words.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// `MatchDocument` or `RemoveDocument` referenced a document id that is
    /// not currently live in the index.
    #[error("not found: {0}")]
    NotFound(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
