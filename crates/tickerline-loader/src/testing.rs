//! Scripted in-memory source for coordinator tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tickerline_catalog::Catalog;
use tickerline_fetch::{FetchError, SeriesSource};
use tickerline_types::{Bar, Series, Symbol};
use tokio::sync::oneshot;

/// Daily series starting 2024-01-02 with the given closes.
pub(crate) fn series(symbol: &str, closes: &[f64]) -> Series {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let timestamp = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
                + chrono::Duration::days(i as i64);
            Bar::new(timestamp, close, close, close, close, 1_000.0)
        })
        .collect();
    Series::new(Symbol::new(symbol).unwrap(), bars).unwrap()
}

pub(crate) fn sym(s: &str) -> Symbol {
    Symbol::new(s).unwrap()
}

type Reply = Result<Series, u16>;

/// Answers fetches from a script.
///
/// Gated symbols block until the test sends their reply; other symbols
/// answer immediately from the served map or fail with 404.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    calls: AtomicUsize,
    served: Mutex<HashMap<Symbol, Reply>>,
    gates: Mutex<HashMap<Symbol, oneshot::Receiver<Reply>>>,
}

impl ScriptedSource {
    pub(crate) fn serve(&self, series: Series) {
        let symbol = series.symbol().clone();
        self.served.lock().unwrap().insert(symbol, Ok(series));
    }

    pub(crate) fn fail(&self, symbol: &str, status: u16) {
        self.served.lock().unwrap().insert(sym(symbol), Err(status));
    }

    /// Makes the next fetch of `symbol` wait for the returned sender.
    pub(crate) fn gate(&self, symbol: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(sym(symbol), rx);
        tx
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn served_reply(&self, symbol: &Symbol) -> Reply {
        let served = self.served.lock().unwrap();
        served.get(symbol).cloned().unwrap_or(Err(404))
    }
}

#[async_trait]
impl SeriesSource for ScriptedSource {
    async fn fetch_series(&self, symbol: &Symbol) -> Result<Series, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().remove(symbol);
        let reply = match gate {
            Some(rx) => rx.await.unwrap_or(Err(499)),
            None => self.served_reply(symbol),
        };
        reply.map_err(|status| FetchError::Status {
            what: symbol.to_string(),
            status,
        })
    }

    async fn fetch_catalog(&self) -> Result<Catalog, FetchError> {
        Ok(Catalog::default())
    }
}
