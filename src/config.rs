//! Runtime configuration for a [`crate::SearchIndex`].

use crate::core::types::DocumentId;

/// Called once for every document identified as a duplicate by
/// [`crate::SearchIndex::remove_duplicates`], before it is removed.
pub type DuplicateSink = Box<dyn Fn(DocumentId) + Send + Sync>;

/// Tunables that do not affect ranking semantics, only execution.
pub struct IndexConfig {
    /// Size hint for a dedicated rayon thread pool. `None` uses the global
    /// rayon pool.
    pub rayon_threads: Option<usize>,
    /// Diagnostic sink invoked for each duplicate document removed.
    pub duplicate_sink: DuplicateSink,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            rayon_threads: None,
            duplicate_sink: Box::new(crate::dedup::log_duplicate_to_stderr),
        }
    }
}

impl std::fmt::Debug for IndexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexConfig")
            .field("rayon_threads", &self.rayon_threads)
            .field("duplicate_sink", &"<fn>")
            .finish()
    }
}

/// Builder for [`IndexConfig`].
#[derive(Default)]
pub struct IndexConfigBuilder {
    config: IndexConfig,
}

impl IndexConfigBuilder {
    pub fn new() -> Self {
        IndexConfigBuilder { config: IndexConfig::default() }
    }

    pub fn rayon_threads(mut self, threads: usize) -> Self {
        self.config.rayon_threads = Some(threads);
        self
    }

    pub fn duplicate_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(DocumentId) + Send + Sync + 'static,
    {
        self.config.duplicate_sink = Box::new(sink);
        self
    }

    pub fn build(self) -> IndexConfig {
        self.config
    }
}
