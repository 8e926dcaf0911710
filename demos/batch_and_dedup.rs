//! Parallel batch queries followed by duplicate removal, mirroring the
//! course project's `process_queries.cpp` and `remove_duplicates.cpp`
//! demos.

use relevantdx::{process_queries_joined, SearchIndex, Status};

fn main() {
    let mut index = SearchIndex::new("and with").unwrap();
    let docs = [
        (1, "funny pet and nasty rat"),
        (2, "funny pet with curly hair"),
        (3, "funny pet and not very nasty rat"),
        (4, "funny pet and curly hair"),
        (5, "funny funny pet and nasty nasty rat"),
    ];
    for (id, text) in docs {
        index.add_document(id, text, Status::Actual, &[]).unwrap();
    }

    let queries = vec![
        "curly hair".to_string(),
        "nasty rat".to_string(),
        "-funny pet".to_string(),
    ];
    println!("before dedup: {} documents", index.document_count());
    for doc in process_queries_joined(&index, &queries).unwrap() {
        println!("  hit id={} relevance={:.4}", doc.id, doc.relevance);
    }

    index.remove_duplicates().unwrap();
    println!("after dedup: {} documents", index.document_count());
}
