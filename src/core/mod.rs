pub mod types;

pub use types::{DocumentId, DocumentRecord, Rating, Status};
