//! Price history loading and transforms.
//!
//! This is a facade crate that re-exports functionality from the tickerline
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use tickerline_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = Arc::new(HttpSource::with_defaults()?);
//!     let cache = Arc::new(SeriesCache::new(50)?);
//!     let mut coordinator = FetchCoordinator::new(source, cache);
//!
//!     coordinator.set_symbol(Some(Symbol::new("AAPL")?));
//!     let state = coordinator.wait_settled().await;
//!
//!     if let Some(series) = state.data {
//!         let view = ChartView::build(&series, None, Granularity::Weekly);
//!         println!("{} weekly bars", view.bars.len());
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tickerline/tickerline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tickerline_types::*;

// Re-export the catalog
pub use tickerline_catalog::{Catalog, SEARCH_LIMIT};

// Re-export transforms
pub use tickerline_transform::{
    Change, ChartView, ComparisonLine, ComparisonView, PercentPoint, Return, aggregate,
    aggregate_in, calculate_return, filter_by_range, filter_by_range_in, format_change,
    format_month, format_price, format_volume, normalize_to_percent,
};

// Re-export sources
#[cfg(feature = "fetch")]
pub use tickerline_fetch::{ClientConfig, FetchError, HttpSource, SeriesSource, url};

// Re-export the loader
#[cfg(feature = "loader")]
pub use tickerline_loader::{
    DEFAULT_CACHE_CAPACITY, FetchCoordinator, LoadState, LoadStatus, LoaderConfig, LoaderError,
    MAX_SYMBOLS, MultiCoordinator, MultiState, SeriesCache,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use tickerline_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle,
};

/// Prelude module for convenient imports.
///
/// ```
/// use tickerline_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tickerline_types::{
        Bar, CatalogEntry, DateRange, DateRangeError, Granularity, RangePreset, Series, Symbol,
    };

    pub use tickerline_catalog::Catalog;

    pub use tickerline_transform::{
        ChartView, ComparisonView, PercentPoint, Return, aggregate, calculate_return,
        filter_by_range, normalize_to_percent,
    };

    #[cfg(feature = "fetch")]
    pub use tickerline_fetch::{ClientConfig, HttpSource, SeriesSource};

    #[cfg(feature = "loader")]
    pub use tickerline_loader::{
        FetchCoordinator, LoaderConfig, MultiCoordinator, SeriesCache,
    };

    #[cfg(feature = "format")]
    pub use tickerline_format::{CsvFormatter, Formatter, JsonFormatter};
}
