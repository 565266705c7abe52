//! Core types for the tickerline price history viewer.
//!
//! This crate provides the fundamental data structures used throughout tickerline:
//!
//! - [`Bar`] - One OHLCV bar with timestamp, prices and volume
//! - [`RawBar`] - Bar as stored on the wire, before timestamp conversion
//! - [`Series`] - Ordered bars for one symbol
//! - [`Symbol`] - Uppercase instrument key
//! - [`Granularity`] - Daily, weekly or monthly aggregation
//! - [`DateRange`] and [`RangePreset`] - Calendar windows
//! - [`CatalogEntry`] - Instrument metadata from the catalog

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tickerline/tickerline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod catalog;
mod date_range;
mod error;
mod granularity;
mod series;
mod symbol;

pub use bar::{Bar, RawBar};
pub use catalog::CatalogEntry;
pub use date_range::{DateRange, RangePreset};
pub use error::{DateRangeError, SeriesError, SymbolError};
pub use granularity::{Granularity, GranularityParseError};
pub use series::Series;
pub use symbol::Symbol;
