//! HTTP source backed by a static data host.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tickerline_catalog::Catalog;
use tickerline_types::{Series, Symbol};
use tracing::{debug, warn};

use crate::parse::{parse_catalog, parse_series};
use crate::url::{DEFAULT_BASE_URL, catalog_url, series_url};
use crate::{FetchError, SeriesSource};

/// Configuration for [`HttpSource`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the data host, without the trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Retry attempts for 5xx, 429 and connection failures. Zero by default,
    /// so a failed request surfaces immediately.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 0,
            base_delay_ms: 250,
            max_delay_ms: 5_000,
            user_agent: format!("tickerline/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Returns a config pointing at `base_url` with default settings.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Opts into retrying transient failures with exponential backoff.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Fetches series and the catalog over HTTP.
///
/// Not-found is reported as [`FetchError::Status`] with code 404 and is
/// never retried.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    config: ClientConfig,
}

impl HttpSource {
    /// Creates a new source with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .tcp_nodelay(true)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, config })
    }

    /// Creates a source with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }

    /// Returns the source configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads one document, retrying transient failures.
    async fn get(&self, url: &str, what: &str) -> Result<Vec<u8>, FetchError> {
        let mut attempts = 0;

        loop {
            debug!(%url, attempt = attempts, "GET");
            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response.bytes().await.map_err(|source| FetchError::Http {
                            what: what.to_string(),
                            source,
                        })?;
                        return Ok(body.to_vec());
                    }

                    let transient =
                        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS;
                    if transient && attempts < self.config.max_retries {
                        attempts += 1;
                        warn!(%url, %status, attempt = attempts, "retrying");
                        tokio::time::sleep(self.backoff_delay(attempts)).await;
                        continue;
                    }
                    return Err(FetchError::Status {
                        what: what.to_string(),
                        status: status.as_u16(),
                    });
                }
                Err(e) if is_retryable(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    warn!(%url, error = %e, attempt = attempts, "retrying");
                    tokio::time::sleep(self.backoff_delay(attempts)).await;
                }
                Err(source) => {
                    return Err(FetchError::Http {
                        what: what.to_string(),
                        source,
                    });
                }
            }
        }
    }

    /// Exponential backoff: `base_delay * 2^attempt`, capped at `max_delay`.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10))
            .min(self.config.max_delay_ms);
        Duration::from_millis(delay)
    }
}

/// Timeouts and connection failures are worth another attempt.
fn is_retryable(error: &reqwest::Error) -> bool {
    !error.is_builder() && (error.is_timeout() || error.is_connect())
}

#[async_trait]
impl SeriesSource for HttpSource {
    async fn fetch_series(&self, symbol: &Symbol) -> Result<Series, FetchError> {
        let url = series_url(&self.config.base_url, symbol);
        let body = self.get(&url, symbol.as_str()).await?;
        let series = parse_series(symbol, &body)?;
        debug!(%symbol, bars = series.len(), "series fetched");
        Ok(series)
    }

    async fn fetch_catalog(&self) -> Result<Catalog, FetchError> {
        let url = catalog_url(&self.config.base_url);
        let body = self.get(&url, "catalog").await?;
        let catalog = parse_catalog(&body)?;
        debug!(entries = catalog.len(), "catalog fetched");
        Ok(catalog)
    }
}
