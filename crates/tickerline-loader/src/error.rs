//! Loader errors.

use thiserror::Error;

/// Errors raised by the cache and the coordinators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// The cache was configured to hold nothing.
    #[error("Cache capacity must be at least 1")]
    ZeroCapacity,

    /// More symbols were selected than there are slots.
    #[error("Too many symbols: {count} selected, at most {max} allowed")]
    TooManySymbols {
        /// Number of symbols requested.
        count: usize,
        /// Number of slots available.
        max: usize,
    },
}
