//! Per-symbol fetch coordination.

use std::sync::Arc;

use futures::future::{AbortHandle, Abortable, Aborted};
use tickerline_fetch::SeriesSource;
use tickerline_types::{Series, Symbol};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::SeriesCache;

/// Lifecycle stage of a coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No symbol selected.
    #[default]
    Idle,
    /// Waiting for the source.
    Loading,
    /// Series available.
    Ready,
    /// The last fetch failed.
    Failed,
}

impl LoadStatus {
    /// Returns the status as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a coordinator currently exposes.
#[derive(Debug, Clone, Default)]
pub struct LoadState {
    /// Incremented on every symbol change.
    pub generation: u64,
    /// Selected symbol.
    pub symbol: Option<Symbol>,
    /// Loaded series, when ready.
    pub data: Option<Arc<Series>>,
    /// True while a fetch for the selected symbol is outstanding.
    pub loading: bool,
    /// Failure message of the last fetch.
    pub error: Option<String>,
}

impl LoadState {
    /// Returns the lifecycle stage this state represents.
    #[must_use]
    pub const fn status(&self) -> LoadStatus {
        if self.loading {
            LoadStatus::Loading
        } else if self.error.is_some() {
            LoadStatus::Failed
        } else if self.data.is_some() {
            LoadStatus::Ready
        } else {
            LoadStatus::Idle
        }
    }
}

/// Result of one spawned fetch.
enum FetchOutcome {
    Ready(Arc<Series>),
    Failed(String),
    Cancelled,
}

/// Loads the series of one selected symbol.
///
/// Cached symbols become ready immediately. Otherwise a fetch is spawned on
/// the Tokio runtime; selecting another symbol (or clearing the selection,
/// or dropping the coordinator) aborts it. Each change bumps the state's
/// generation, and a fetch only settles if the generation it was issued
/// under is still current, so a slow response for an old symbol can never
/// replace a newer one.
#[derive(Debug)]
pub struct FetchCoordinator<S> {
    source: Arc<S>,
    cache: Arc<SeriesCache>,
    state: Arc<watch::Sender<LoadState>>,
    in_flight: Option<AbortHandle>,
}

impl<S: SeriesSource + 'static> FetchCoordinator<S> {
    /// Creates an idle coordinator.
    #[must_use]
    pub fn new(source: Arc<S>, cache: Arc<SeriesCache>) -> Self {
        let (state, _) = watch::channel(LoadState::default());
        Self {
            source,
            cache,
            state: Arc::new(state),
            in_flight: None,
        }
    }

    /// Selects `symbol`, or clears the selection with `None`.
    ///
    /// Selecting the symbol that is already selected does nothing.
    ///
    /// # Panics
    ///
    /// Panics if a fetch must be spawned outside a Tokio runtime.
    pub fn set_symbol(&mut self, symbol: Option<Symbol>) {
        if self.state.borrow().symbol == symbol {
            return;
        }
        self.cancel_in_flight();

        let cached = symbol.as_ref().and_then(|s| self.cache.get(s));
        let loading = symbol.is_some() && cached.is_none();
        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            generation = state.generation;
            state.symbol = symbol.clone();
            state.data = cached;
            state.loading = loading;
            state.error = None;
        });

        match symbol {
            Some(symbol) if loading => self.spawn_fetch(symbol, generation),
            Some(symbol) => debug!(%symbol, generation, "served from cache"),
            None => debug!(generation, "selection cleared"),
        }
    }

    /// Returns the selected symbol.
    #[must_use]
    pub fn symbol(&self) -> Option<Symbol> {
        self.state.borrow().symbol.clone()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    /// Waits until no fetch is outstanding and returns the settled state.
    pub async fn wait_settled(&self) -> LoadState {
        let mut rx = self.state.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        match rx.wait_for(|state| !state.loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.snapshot(),
        }
    }

    /// Returns the shared cache.
    #[must_use]
    pub const fn cache(&self) -> &Arc<SeriesCache> {
        &self.cache
    }

    fn spawn_fetch(&mut self, symbol: Symbol, generation: u64) {
        let (handle, registration) = AbortHandle::new_pair();
        let source = Arc::clone(&self.source);
        let cache = Arc::clone(&self.cache);
        let state = Arc::clone(&self.state);

        debug!(%symbol, generation, "fetch issued");
        tokio::spawn(async move {
            let outcome = match Abortable::new(source.fetch_series(&symbol), registration).await {
                Ok(Ok(series)) => FetchOutcome::Ready(Arc::new(series)),
                Ok(Err(e)) => FetchOutcome::Failed(e.to_string()),
                Err(Aborted) => FetchOutcome::Cancelled,
            };
            settle(&state, &cache, &symbol, generation, outcome);
        });
        self.in_flight = Some(handle);
    }

    fn cancel_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl<S> Drop for FetchCoordinator<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

/// Applies a fetch outcome if `generation` is still current.
fn settle(
    state: &watch::Sender<LoadState>,
    cache: &SeriesCache,
    symbol: &Symbol,
    generation: u64,
    outcome: FetchOutcome,
) {
    if matches!(outcome, FetchOutcome::Cancelled) {
        debug!(%symbol, generation, "fetch cancelled");
        return;
    }

    let applied = state.send_if_modified(|current| {
        if current.generation != generation {
            return false;
        }
        match &outcome {
            FetchOutcome::Ready(series) => {
                cache.put(symbol.clone(), Arc::clone(series));
                current.data = Some(Arc::clone(series));
                current.error = None;
            }
            FetchOutcome::Failed(message) => {
                current.data = None;
                current.error = Some(message.clone());
            }
            FetchOutcome::Cancelled => return false,
        }
        current.loading = false;
        true
    });

    match (&outcome, applied) {
        (FetchOutcome::Failed(message), true) => warn!(%symbol, generation, %message, "fetch failed"),
        (_, true) => debug!(%symbol, generation, "fetch settled"),
        (_, false) => debug!(%symbol, generation, "stale fetch discarded"),
    }
}
