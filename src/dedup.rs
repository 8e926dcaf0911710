//! `RemoveDuplicates`: collapse documents that share an identical term set.
//!
//! Ported from `original_source/search-server/remove_duplicates.cpp`. Two
//! documents are duplicates if their *sets* of non-stop words match exactly;
//! term frequencies and word order are irrelevant. Ids are scanned in
//! ascending order and the first-seen document in each group survives.

use std::collections::{BTreeSet, HashSet};

use crate::core::types::DocumentId;
use crate::error::SearchResult;
use crate::index::InvertedIndex;

/// Remove every document whose term set duplicates an earlier (lower-id)
/// document's, reporting each removed id to `on_duplicate` before it is
/// deleted from `index`.
pub fn remove_duplicates<F>(index: &mut InvertedIndex, mut on_duplicate: F) -> SearchResult<()>
where
    F: FnMut(DocumentId),
{
    let mut seen_term_sets: HashSet<BTreeSet<String>> = HashSet::new();
    let mut to_remove = Vec::new();

    for id in index.active_ids() {
        let term_set: BTreeSet<String> = index
            .word_frequencies(id)
            .keys()
            .map(|term| term.to_string())
            .collect();
        if !seen_term_sets.insert(term_set) {
            to_remove.push(id);
        }
    }

    for id in to_remove {
        on_duplicate(id);
        index.remove_document(id)?;
    }

    Ok(())
}

/// Default diagnostic sink: writes the canonical line to stderr.
pub fn log_duplicate_to_stderr(id: DocumentId) {
    eprintln!("Found duplicate document id {}", id.value());
}
