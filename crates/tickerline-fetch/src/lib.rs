//! Series sources for tickerline.
//!
//! This crate provides the data side of the loader:
//!
//! - [`SeriesSource`] - Async trait the loader fetches through
//! - [`HttpSource`] - reqwest client for the static data host, with retries
//! - [`url::series_url`] and [`url::catalog_url`] - Data host URL layout
//! - [`parse_series`] and [`parse_catalog`] - Body decoding and validation

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tickerline/tickerline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod parse;
mod source;
pub mod url;

pub use client::{ClientConfig, HttpSource};
pub use error::FetchError;
pub use parse::{parse_catalog, parse_series};
pub use source::SeriesSource;
