//! Fixed-width multi-symbol coordination.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tickerline_fetch::SeriesSource;
use tickerline_types::{Series, Symbol};
use tracing::debug;

use crate::{FetchCoordinator, LoadState, LoaderError, SeriesCache};

/// Number of symbols that can be loaded side by side.
pub const MAX_SYMBOLS: usize = 4;

/// Aggregate view over all occupied slots.
#[derive(Debug, Clone, Default)]
pub struct MultiState {
    /// Occupied slots' symbols, in slot order.
    pub symbols: Vec<Symbol>,
    /// Series of every ready slot.
    pub datasets: HashMap<Symbol, Arc<Series>>,
    /// True while any occupied slot is loading.
    pub loading: bool,
    /// Failure message of every failed slot.
    pub errors: HashMap<Symbol, String>,
}

impl MultiState {
    /// Returns the first failed slot, in slot order.
    #[must_use]
    pub fn first_error(&self) -> Option<(&Symbol, &str)> {
        self.symbols
            .iter()
            .find_map(|s| self.errors.get(s).map(|e| (s, e.as_str())))
    }

    /// Returns the loaded series in slot order, skipping slots that are not
    /// ready. A symbol selected in several slots is yielded once.
    pub fn ready(&self) -> impl Iterator<Item = &Arc<Series>> {
        let mut seen = HashSet::new();
        self.symbols
            .iter()
            .filter(move |s| seen.insert(*s))
            .filter_map(move |s| self.datasets.get(s))
    }

    /// Returns true if every occupied slot has its series.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.loading && self.symbols.iter().all(|s| self.datasets.contains_key(s))
    }

    fn from_slots<'a>(slots: impl IntoIterator<Item = &'a LoadState>) -> Self {
        let mut state = Self::default();
        for slot in slots {
            let Some(symbol) = &slot.symbol else {
                continue;
            };
            state.symbols.push(symbol.clone());
            state.loading |= slot.loading;
            if let Some(data) = &slot.data {
                state.datasets.insert(symbol.clone(), Arc::clone(data));
            }
            if let Some(error) = &slot.error {
                state.errors.insert(symbol.clone(), error.clone());
            }
        }
        state
    }
}

/// Four [`FetchCoordinator`]s sharing one cache.
///
/// Slot `i` follows the `i`-th selected symbol; slots past the end of the
/// selection are cleared. Slots fail and succeed independently.
#[derive(Debug)]
pub struct MultiCoordinator<S> {
    slots: [FetchCoordinator<S>; MAX_SYMBOLS],
}

impl<S: SeriesSource + 'static> MultiCoordinator<S> {
    /// Creates four idle slots over `source` and `cache`.
    #[must_use]
    pub fn new(source: Arc<S>, cache: Arc<SeriesCache>) -> Self {
        Self {
            slots: std::array::from_fn(|_| {
                FetchCoordinator::new(Arc::clone(&source), Arc::clone(&cache))
            }),
        }
    }

    /// Selects up to [`MAX_SYMBOLS`] symbols.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving every slot untouched, if more than
    /// [`MAX_SYMBOLS`] symbols are given.
    ///
    /// # Panics
    ///
    /// Panics if a fetch must be spawned outside a Tokio runtime.
    pub fn set_symbols(&mut self, symbols: &[Symbol]) -> Result<(), LoaderError> {
        if symbols.len() > MAX_SYMBOLS {
            return Err(LoaderError::TooManySymbols {
                count: symbols.len(),
                max: MAX_SYMBOLS,
            });
        }
        debug!(count = symbols.len(), "selection changed");
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.set_symbol(symbols.get(i).cloned());
        }
        Ok(())
    }

    /// Returns the selected symbols, in slot order.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        self.slots.iter().filter_map(FetchCoordinator::symbol).collect()
    }

    /// Returns the aggregate state.
    #[must_use]
    pub fn snapshot(&self) -> MultiState {
        let states: Vec<_> = self.slots.iter().map(FetchCoordinator::snapshot).collect();
        MultiState::from_slots(&states)
    }

    /// Returns the first failed slot, in slot order.
    #[must_use]
    pub fn first_error(&self) -> Option<(Symbol, String)> {
        self.snapshot()
            .first_error()
            .map(|(symbol, message)| (symbol.clone(), message.to_string()))
    }

    /// Returns the coordinator of slot `index`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&FetchCoordinator<S>> {
        self.slots.get(index)
    }

    /// Waits until no slot is loading and returns the aggregate state.
    pub async fn wait_settled(&self) -> MultiState {
        let mut states = Vec::with_capacity(MAX_SYMBOLS);
        for slot in &self.slots {
            states.push(slot.wait_settled().await);
        }
        MultiState::from_slots(&states)
    }
}
