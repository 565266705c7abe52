//! Shared source, cache and progress settings for one CLI invocation.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use tickerline_lib::prelude::*;
use tracing::debug;

pub(crate) struct Session {
    pub(crate) source: Arc<HttpSource>,
    pub(crate) cache: Arc<SeriesCache>,
    quiet: bool,
}

impl Session {
    pub(crate) fn new(base_url: &str, cache_capacity: usize, quiet: bool) -> Result<Self> {
        let source = HttpSource::new(ClientConfig::with_base_url(base_url))
            .context("Failed to create HTTP client")?;
        let config = LoaderConfig::default().with_cache_capacity(cache_capacity);
        let cache = SeriesCache::from_config(&config)?;
        debug!(base_url, cache_capacity, "Session ready");
        Ok(Self {
            source: Arc::new(source),
            cache: Arc::new(cache),
            quiet,
        })
    }

    pub(crate) const fn quiet(&self) -> bool {
        self.quiet
    }

    /// Starts a spinner, or a hidden bar in quiet mode.
    pub(crate) fn spinner(&self, message: impl Into<String>) -> Result<ProgressBar> {
        if self.quiet {
            return Ok(ProgressBar::hidden());
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")?);
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));
        Ok(pb)
    }

    /// Fetches the catalog behind a spinner.
    pub(crate) async fn catalog(&self) -> Result<Catalog> {
        let progress = self.spinner("Loading catalog")?;
        let catalog = self.source.fetch_catalog().await;
        progress.finish_and_clear();
        Ok(catalog?)
    }
}
