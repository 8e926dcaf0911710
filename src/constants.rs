//! Compatibility constants that must match the original implementation
//! bit-for-bit.

/// Results are truncated to this many documents, highest relevance first.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Two relevance scores within this tolerance are considered tied, and the
/// tie is broken by rating instead.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Minutes in a day; the size of the request queue's rolling window.
pub const MIN_IN_DAY: usize = 1440;
