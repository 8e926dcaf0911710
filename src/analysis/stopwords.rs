//! Stop-word set construction.

use std::collections::HashSet;

use crate::analysis::tokenizer::{contains_control_byte, split_into_words};
use crate::error::{SearchError, SearchResult};

/// An immutable, deduplicated set of stop words.
///
/// Construction accepts either a single whitespace-delimited string (which
/// is tokenized first) or any iterable of term strings. Empty strings are
/// discarded silently; a control byte anywhere in a surviving token fails
/// construction with [`SearchError::InvalidInput`].
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build from a single whitespace-delimited string.
    pub fn from_text(text: &str) -> SearchResult<Self> {
        Self::from_iter(split_into_words(text).into_iter().map(str::to_owned))
    }

    /// Build from any iterable of term strings.
    pub fn from_iter<I, S>(words: I) -> SearchResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if contains_control_byte(word) {
                return Err(SearchError::InvalidInput(format!(
                    "stop word {word:?} contains a control byte"
                )));
            }
            set.insert(word.to_owned());
        }
        Ok(StopWords { words: set })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}
