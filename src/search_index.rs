//! The public façade: `SearchIndex` composes the tokenizer, stop-word set,
//! inverted index, query parser, and ranking/matching engines into the one
//! type host programs embed.

use crate::analysis::StopWords;
use crate::config::IndexConfig;
use crate::core::types::{DocumentId, Rating, Status};
use crate::dedup;
use crate::error::SearchResult;
use crate::index::InvertedIndex;
use crate::pagination::Paginator;
use crate::query::parser::{parse_query, ParseMode};
use crate::search::{self, Document};

/// An in-memory TF-IDF document index with parallel ranking support.
pub struct SearchIndex {
    index: InvertedIndex,
    stop_words: StopWords,
    config: IndexConfig,
    thread_pool: Option<rayon::ThreadPool>,
}

impl SearchIndex {
    /// Build an index whose stop words are the whitespace-separated tokens
    /// of `stop_words_text`, using default configuration.
    pub fn new(stop_words_text: &str) -> SearchResult<Self> {
        Self::with_config(stop_words_text, IndexConfig::default())
    }

    pub fn with_config(stop_words_text: &str, config: IndexConfig) -> SearchResult<Self> {
        let thread_pool = build_thread_pool(&config)?;
        Ok(SearchIndex {
            index: InvertedIndex::new(),
            stop_words: StopWords::from_text(stop_words_text)?,
            config,
            thread_pool,
        })
    }

    /// Build an index from an arbitrary iterable of stop words rather than a
    /// pre-tokenized string.
    pub fn from_stop_words<I, S>(stop_words: I, config: IndexConfig) -> SearchResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let thread_pool = build_thread_pool(&config)?;
        Ok(SearchIndex {
            index: InvertedIndex::new(),
            stop_words: StopWords::from_iter(stop_words)?,
            config,
            thread_pool,
        })
    }

    /// Run `f` inside the configured thread pool, or on whichever pool the
    /// caller is already part of when no `rayon_threads` hint was given.
    pub(crate) fn run_parallel<T: Send>(&self, f: impl FnOnce() -> T + Send) -> T {
        match &self.thread_pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }

    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    pub fn is_active(&self, id: i64) -> bool {
        self.index.is_active(DocumentId(id))
    }

    /// Ascending iteration over the currently live document ids.
    pub fn active_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.index.active_ids().map(|id| id.value())
    }

    #[tracing::instrument(skip(self, text), fields(id, text_len = text.len()))]
    pub fn add_document(
        &mut self,
        id: i64,
        text: &str,
        status: Status,
        ratings: &[i64],
    ) -> SearchResult<()> {
        let doc_id = DocumentId(id);
        self.index.add_document(doc_id, text, status, ratings, &self.stop_words)?;
        tracing::debug!(document_count = self.index.document_count(), "document added");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn remove_document(&mut self, id: i64) -> SearchResult<()> {
        self.index.remove_document(DocumentId(id))?;
        tracing::debug!(document_count = self.index.document_count(), "document removed");
        Ok(())
    }

    /// Sequential variant of document removal. Parallelism has no benefit
    /// for a single removal; this overload exists for API symmetry with the
    /// ranking and batch-query surfaces.
    pub fn remove_document_parallel(&mut self, id: i64) -> SearchResult<()> {
        self.remove_document(id)
    }

    /// Rank live documents with `Status::Actual` against `query_text`.
    #[tracing::instrument(skip(self, query_text))]
    pub fn find_top_documents(&self, query_text: &str) -> SearchResult<Vec<Document>> {
        self.find_top_documents_with_status(query_text, Status::Actual)
    }

    pub fn find_top_documents_with_status(
        &self,
        query_text: &str,
        status: Status,
    ) -> SearchResult<Vec<Document>> {
        self.find_top_documents_by(query_text, move |_, doc_status, _| doc_status == status)
    }

    pub fn find_top_documents_by<P>(&self, query_text: &str, predicate: P) -> SearchResult<Vec<Document>>
    where
        P: Fn(i64, Status, Rating) -> bool,
    {
        let query = parse_query(query_text, &self.stop_words, ParseMode::AsParsed)?;
        let wrapped = |id: DocumentId, status: Status, rating: Rating| predicate(id.value(), status, rating);
        Ok(search::find_top_documents(&self.index, &query, wrapped))
    }

    pub fn find_top_documents_parallel(&self, query_text: &str) -> SearchResult<Vec<Document>> {
        self.find_top_documents_with_status_parallel(query_text, Status::Actual)
    }

    pub fn find_top_documents_with_status_parallel(
        &self,
        query_text: &str,
        status: Status,
    ) -> SearchResult<Vec<Document>> {
        self.find_top_documents_by_parallel(query_text, move |_, doc_status, _| doc_status == status)
    }

    pub fn find_top_documents_by_parallel<P>(
        &self,
        query_text: &str,
        predicate: P,
    ) -> SearchResult<Vec<Document>>
    where
        P: Fn(i64, Status, Rating) -> bool + Sync,
    {
        let query = parse_query(query_text, &self.stop_words, ParseMode::AsParsed)?;
        let wrapped = |id: DocumentId, status: Status, rating: Rating| predicate(id.value(), status, rating);
        Ok(self.run_parallel(|| search::find_top_documents_parallel(&self.index, &query, wrapped)))
    }

    /// Which plus terms of `query_text` appear in document `id`'s text, or
    /// an empty vector if any minus term is present.
    pub fn match_document(&self, query_text: &str, id: i64) -> SearchResult<(Vec<String>, Status)> {
        let query = parse_query(query_text, &self.stop_words, ParseMode::SortedUniqued)?;
        search::match_document(&self.index, &query, DocumentId(id))
    }

    pub fn match_document_parallel(&self, query_text: &str, id: i64) -> SearchResult<(Vec<String>, Status)> {
        let query = parse_query(query_text, &self.stop_words, ParseMode::SortedUniqued)?;
        self.run_parallel(|| search::match_document_parallel(&self.index, &query, DocumentId(id)))
    }

    /// Remove every document whose term set duplicates an earlier one's,
    /// reporting each removed id through the configured diagnostic sink.
    #[tracing::instrument(skip(self))]
    pub fn remove_duplicates(&mut self) -> SearchResult<()> {
        let sink = &self.config.duplicate_sink;
        dedup::remove_duplicates(&mut self.index, |id| sink(id))
    }

    /// Page `results` into chunks of `page_size`, for presentation.
    pub fn paginate<'a>(&self, results: &'a [Document], page_size: usize) -> Paginator<'a, Document> {
        Paginator::new(results, page_size)
    }
}

/// Builds a dedicated pool when `config.rayon_threads` asks for one; `None`
/// means the parallel call sites fall back to rayon's global pool.
fn build_thread_pool(config: &IndexConfig) -> SearchResult<Option<rayon::ThreadPool>> {
    match config.rayon_threads {
        None => Ok(None),
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map(Some)
            .map_err(|e| crate::error::SearchError::InvalidInput(format!("could not build thread pool: {e}"))),
    }
}
