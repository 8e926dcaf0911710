//! A minimal walkthrough: build an index, add a few documents, rank a
//! couple of queries, and show the rating tiebreak in action.

use relevantdx::{SearchIndex, Status};

fn main() {
    let mut index = SearchIndex::new("a an on the in with and").unwrap();

    index
        .add_document(0, "white cat and fashionable collar", Status::Actual, &[8])
        .unwrap();
    index
        .add_document(1, "fluffy cat fluffy tail", Status::Actual, &[7, 2, 7])
        .unwrap();
    index
        .add_document(2, "groomed dog expressive eyes", Status::Actual, &[5, -12, 2, 1])
        .unwrap();
    index
        .add_document(3, "groomed starling eugene", Status::Banned, &[9])
        .unwrap();

    println!("{} documents indexed", index.document_count());

    for query in ["fluffy groomed cat", "fluffy groomed cat -dog"] {
        println!("\nquery: {query}");
        for doc in index.find_top_documents(query).unwrap() {
            println!("  id={} relevance={:.4} rating={}", doc.id, doc.relevance, doc.rating);
        }
    }
}
