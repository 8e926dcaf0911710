pub mod matcher;
pub mod ranker;

pub use matcher::{match_document, match_document_parallel};
pub use ranker::{find_top_documents, find_top_documents_parallel, Document};
