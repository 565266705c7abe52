//! Series loading for tickerline.
//!
//! This crate keeps fetched series in memory and decides which fetch result
//! is allowed to reach the screen:
//!
//! - [`SeriesCache`] - Bounded store with first-in, first-out eviction
//! - [`FetchCoordinator`] - Cancellable loader for one selected symbol
//! - [`MultiCoordinator`] - Up to [`MAX_SYMBOLS`] coordinators side by side
//! - [`LoaderConfig`] - Cache sizing
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tickerline_fetch::HttpSource;
//! use tickerline_loader::{FetchCoordinator, SeriesCache};
//! use tickerline_types::Symbol;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = Arc::new(HttpSource::with_defaults()?);
//! let cache = Arc::new(SeriesCache::new(50)?);
//! let mut coordinator = FetchCoordinator::new(source, cache);
//!
//! coordinator.set_symbol(Some(Symbol::new("AAPL")?));
//! let state = coordinator.wait_settled().await;
//! println!("{:?}", state.status());
//! # Ok(())
//! # }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tickerline/tickerline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cache;
mod config;
mod coordinator;
mod error;
mod multi;

#[cfg(test)]
mod testing;

pub use cache::SeriesCache;
pub use config::{DEFAULT_CACHE_CAPACITY, LoaderConfig};
pub use coordinator::{FetchCoordinator, LoadState, LoadStatus};
pub use error::LoaderError;
pub use multi::{MAX_SYMBOLS, MultiCoordinator, MultiState};
