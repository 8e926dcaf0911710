//! Whitespace tokenization and control-byte validation.
//!
//! Mirrors `original_source/search-server/string_processing.cpp`: split on
//! runs of ASCII space, never producing empty tokens. Validation of control
//! bytes is the caller's job, not the tokenizer's — it only splits.

/// Split `text` on runs of ASCII space (0x20), yielding non-empty borrowed
/// substrings in order. Leading, trailing, and internal runs of spaces
/// produce no empty tokens.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}

/// True if `text` contains a byte in `0x00..=0x1F` (a control byte).
pub fn contains_control_byte(text: &str) -> bool {
    text.bytes().any(|b| b < 0x20)
}
