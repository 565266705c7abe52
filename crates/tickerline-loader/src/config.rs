//! Loader configuration.

/// Default number of series kept in memory.
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Configuration for the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Maximum number of series held by the cache. Must be positive.
    pub cache_capacity: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl LoaderConfig {
    /// Sets the cache capacity.
    #[must_use]
    pub const fn with_cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }
}
