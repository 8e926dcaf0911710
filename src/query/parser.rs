//! Query parsing: plus/minus term classification and validation.
//!
//! Ported from `original_source/search-server/search_server.cpp`'s
//! `ParseQueryWord`/`ParseQuery`. The minus-term validation rule is: a minus
//! term is invalid iff its token equals `-`, starts with `--`, or ends with
//! `-`. We implement that rule directly rather than reproducing the
//! original's `word[1]` indexing artifact, which is undefined behavior on a
//! bare `-`.

use crate::analysis::stopwords::StopWords;
use crate::analysis::tokenizer::{contains_control_byte, split_into_words};
use crate::error::{SearchError, SearchResult};

/// A parsed query: the plus and minus terms, in the mode the caller asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub plus_terms: Vec<String>,
    pub minus_terms: Vec<String>,
}

/// How duplicate terms within a parsed query are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Preserve input order and duplicates (used by ranking).
    AsParsed,
    /// Sort and deduplicate both term lists (used by `match_document`).
    SortedUniqued,
}

/// Parse `text` into a [`ParsedQuery`], dropping stop words and validating
/// minus-term syntax and control bytes.
pub fn parse_query(text: &str, stop_words: &StopWords, mode: ParseMode) -> SearchResult<ParsedQuery> {
    if contains_control_byte(text) {
        return Err(SearchError::InvalidInput(
            "query text contains a control byte".to_string(),
        ));
    }

    let mut plus_terms = Vec::new();
    let mut minus_terms = Vec::new();

    for token in split_into_words(text) {
        if let Some(rest) = token.strip_prefix('-') {
            if rest.is_empty() || rest.starts_with('-') || rest.ends_with('-') {
                return Err(SearchError::InvalidInput(format!(
                    "malformed minus term {token:?}"
                )));
            }
            if stop_words.contains(rest) {
                continue;
            }
            minus_terms.push(rest.to_string());
        } else {
            if stop_words.contains(token) {
                continue;
            }
            plus_terms.push(token.to_string());
        }
    }

    if mode == ParseMode::SortedUniqued {
        plus_terms.sort();
        plus_terms.dedup();
        minus_terms.sort();
        minus_terms.dedup();
    }

    Ok(ParsedQuery { plus_terms, minus_terms })
}
