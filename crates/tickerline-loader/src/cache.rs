//! Bounded in-memory series store.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tickerline_types::{Series, Symbol};
use tracing::debug;

use crate::{LoaderConfig, LoaderError};

/// Symbol-keyed series store with first-in, first-out eviction.
///
/// Inserting a new symbol into a full cache evicts the entry that was
/// inserted earliest. Lookups never change that order, and re-inserting a
/// symbol that is already present replaces its series in place. Entries
/// never expire; [`evict`](Self::evict) is the only way to force a refetch.
///
/// All access goes through one mutex, so the entry count never exceeds the
/// capacity as seen by any caller.
#[derive(Debug)]
pub struct SeriesCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<Symbol, Arc<Series>>,
    /// Symbols in insertion order, oldest first.
    order: VecDeque<Symbol>,
}

impl SeriesCache {
    /// Creates an empty cache holding at most `capacity` series.
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, LoaderError> {
        if capacity == 0 {
            return Err(LoaderError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            inner: Mutex::new(CacheInner {
                entries: HashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
            }),
        })
    }

    /// Creates a cache sized by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured capacity is zero.
    pub fn from_config(config: &LoaderConfig) -> Result<Self, LoaderError> {
        Self::new(config.cache_capacity)
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the series cached for `symbol`.
    #[must_use]
    pub fn get(&self, symbol: &Symbol) -> Option<Arc<Series>> {
        self.lock().entries.get(symbol).cloned()
    }

    /// Returns true if `symbol` is cached.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.lock().entries.contains_key(symbol)
    }

    /// Inserts a series, returning the symbol evicted to make room.
    pub fn put(&self, symbol: Symbol, series: impl Into<Arc<Series>>) -> Option<Symbol> {
        let series = series.into();
        let mut inner = self.lock();

        if let Some(slot) = inner.entries.get_mut(&symbol) {
            *slot = series;
            return None;
        }

        let evicted = if inner.entries.len() >= self.capacity {
            let oldest = inner.order.pop_front();
            if let Some(oldest) = &oldest {
                inner.entries.remove(oldest);
                debug!(symbol = %oldest, "evicted from series cache");
            }
            oldest
        } else {
            None
        };

        inner.order.push_back(symbol.clone());
        inner.entries.insert(symbol, series);
        evicted
    }

    /// Removes `symbol`, returning its series if it was cached.
    pub fn evict(&self, symbol: &Symbol) -> Option<Arc<Series>> {
        let mut inner = self.lock();
        let removed = inner.entries.remove(symbol)?;
        inner.order.retain(|s| s != symbol);
        Some(removed)
    }

    /// Returns the number of cached series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Returns cached symbols, oldest first.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        self.lock().order.iter().cloned().collect()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.order.clear();
    }

    // No operation leaves the maps inconsistent across a panic, so a
    // poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self {
            capacity: crate::DEFAULT_CACHE_CAPACITY,
            inner: Mutex::new(CacheInner::default()),
        }
    }
}
