//! OHLCV transforms for tickerline.
//!
//! Everything here is synchronous and pure:
//!
//! - [`aggregate`] - Re-aggregate daily bars into weekly or monthly bars
//! - [`filter_by_range`] - Slice bars to an inclusive calendar window
//! - [`calculate_return`] - Close-to-close return across a window
//! - [`normalize_to_percent`] - Rebase closes to percent change
//! - [`ChartView`] and [`ComparisonView`] - The full pipeline for one or
//!   several instruments
//! - [`format_price`], [`format_volume`], [`format_change`] and
//!   [`format_month`] - Display helpers

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tickerline/tickerline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod display;
mod range;
mod returns;
mod view;

pub use aggregator::{aggregate, aggregate_in};
pub use display::{Change, format_change, format_month, format_price, format_volume};
pub use range::{filter_by_range, filter_by_range_in};
pub use returns::{PercentPoint, Return, calculate_return, normalize_to_percent};
pub use view::{ChartView, ComparisonLine, ComparisonView};
