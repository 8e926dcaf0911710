use relevantdx::{SearchIndex, Status};

#[test]
fn scenario_a_stop_words_in_query() {
    let mut index = SearchIndex::new("in the").unwrap();
    index.add_document(1, "cat in the city", Status::Actual, &[1, 2, 3]).unwrap();

    let stop_word_only = index.find_top_documents("in").unwrap();
    assert!(stop_word_only.is_empty());

    let hits = index.find_top_documents("cat").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
    assert_eq!(hits[0].rating, 2);
    assert!(hits[0].relevance.abs() < 1e-6);
}

#[test]
fn scenario_b_minus_word_filter() {
    let mut index = SearchIndex::new("sa").unwrap();
    index.add_document(42, "cat in the city", Status::Actual, &[1, 2, 3]).unwrap();
    index.add_document(13, "the dog and clock", Status::Actual, &[1, 2, 3]).unwrap();

    let hits = index.find_top_documents("-in the").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 13);

    let hits = index.find_top_documents("-the in").unwrap();
    assert!(hits.is_empty());
}

#[test]
fn scenario_c_rating_tiebreak() {
    let mut index = SearchIndex::new("sa").unwrap();
    index.add_document(42, "cat in the city", Status::Actual, &[3, 3, 3]).unwrap();
    index.add_document(13, "the dog and clock", Status::Actual, &[1, 2, 3]).unwrap();

    let hits = index.find_top_documents("in and").unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!((hits[0].id, hits[0].rating), (42, 3));
    assert_eq!((hits[1].id, hits[1].rating), (13, 2));
}

#[test]
fn scenario_d_top_k_truncation() {
    let mut index = SearchIndex::new("").unwrap();
    for id in 0..6 {
        index.add_document(id, "x", Status::Actual, &[]).unwrap();
    }
    let hits = index.find_top_documents("x").unwrap();
    assert_eq!(hits.len(), 5);
}

#[test]
fn scenario_e_duplicate_removal() {
    let mut index = SearchIndex::new("and with").unwrap();
    let docs = [
        (1, "funny pet and nasty rat"),
        (2, "funny pet with curly hair"),
        (3, "funny pet and curly hair"),
        (4, "funny pet and curly hair"),
        (5, "funny funny pet and nasty nasty rat"),
        (6, "funny pet and not very nasty rat"),
        (7, "very nasty rat and not very funny pet"),
        (8, "pet with rat and rat and rat"),
        (9, "nasty rat, not very funny, not very pet"),
    ];
    for (id, text) in docs {
        index.add_document(id, text, Status::Actual, &[]).unwrap();
    }
    assert_eq!(index.document_count(), 9);

    index.remove_duplicates().unwrap();

    assert_eq!(index.document_count(), 5);
    let mut survivors: Vec<i64> = index.active_ids().collect();
    survivors.sort();
    assert_eq!(survivors, vec![1, 2, 6, 8, 9]);
}

#[test]
fn scenario_f_parallel_consistency() {
    let mut index = SearchIndex::new("and with").unwrap();
    index.add_document(1, "curly cat curly tail", Status::Actual, &[7]).unwrap();
    index.add_document(2, "curly dog and fancy collar", Status::Actual, &[2, 3]).unwrap();
    index.add_document(3, "groomed starling eugene", Status::Banned, &[9]).unwrap();

    let sequential = index.find_top_documents("curly -fancy").unwrap();
    let parallel = index.find_top_documents_parallel("curly -fancy").unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn rejects_document_made_entirely_of_stop_words() {
    let mut index = SearchIndex::new("in the").unwrap();
    let err = index.add_document(1, "in the", Status::Actual, &[]).unwrap_err();
    assert!(matches!(err, relevantdx::SearchError::InvalidInput(_)));
}

#[test]
fn malformed_minus_terms_are_rejected() {
    let index = SearchIndex::new("").unwrap();
    for query in ["-", "--x", "word -"] {
        let err = index.find_top_documents(query).unwrap_err();
        assert!(matches!(err, relevantdx::SearchError::InvalidInput(_)));
    }
}

#[test]
fn all_stop_word_query_returns_no_documents() {
    let mut index = SearchIndex::new("in the").unwrap();
    index.add_document(1, "cat city", Status::Actual, &[]).unwrap();
    let hits = index.find_top_documents("in the").unwrap();
    assert!(hits.is_empty());
}
