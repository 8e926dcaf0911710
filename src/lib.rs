//! An in-memory TF-IDF document search index.
//!
//! Documents are short, tokenized texts with a rating and status tag.
//! Queries are free text with optional `-minus` exclusion terms. Relevance
//! combines term-frequency/inverse-document-frequency scoring with a rating
//! tiebreak; both ranking and batch query dispatch have sequential and
//! rayon-parallel variants.

pub mod analysis;
pub mod batch;
pub mod concurrency;
pub mod config;
pub mod constants;
pub mod core;
pub mod dedup;
pub mod error;
pub mod index;
pub mod pagination;
pub mod query;
pub mod request_queue;
pub mod scoring;
pub mod search;
mod search_index;

pub use batch::{process_queries, process_queries_joined};
pub use config::{IndexConfig, IndexConfigBuilder};
pub use constants::{MAX_RESULT_DOCUMENT_COUNT, MIN_IN_DAY, RELEVANCE_EPSILON};
pub use crate::core::types::{DocumentId, DocumentRecord, Rating, Status};
pub use error::{SearchError, SearchResult};
pub use pagination::{Page, Paginator};
pub use request_queue::RequestQueue;
pub use search::Document;
pub use search_index::SearchIndex;
