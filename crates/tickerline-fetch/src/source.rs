//! The seam between loaders and wherever series live.

use std::sync::Arc;

use async_trait::async_trait;
use tickerline_catalog::Catalog;
use tickerline_types::{Series, Symbol};

use crate::FetchError;

/// Provides series and the catalog, usually over the network.
///
/// Implementations must be cheap to share: loaders hold them in an [`Arc`]
/// and call them from spawned tasks.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Fetches the full daily history of `symbol`.
    async fn fetch_series(&self, symbol: &Symbol) -> Result<Series, FetchError>;

    /// Fetches the instrument catalog.
    async fn fetch_catalog(&self) -> Result<Catalog, FetchError>;
}

#[async_trait]
impl<S: SeriesSource + ?Sized> SeriesSource for Arc<S> {
    async fn fetch_series(&self, symbol: &Symbol) -> Result<Series, FetchError> {
        (**self).fetch_series(symbol).await
    }

    async fn fetch_catalog(&self) -> Result<Catalog, FetchError> {
        (**self).fetch_catalog().await
    }
}
