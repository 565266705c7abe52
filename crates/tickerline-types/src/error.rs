//! Error types for tickerline.

use chrono::NaiveDate;
use thiserror::Error;

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {from} > {to}")]
    InvalidRange {
        /// The first day of the range.
        from: NaiveDate,
        /// The last day of the range.
        to: NaiveDate,
    },

    /// Preset label not recognized.
    #[error("Unknown range preset '{0}', expected one of: 1M, 3M, 6M, 1Y, 5Y, All")]
    UnknownPreset(String),
}

/// Error for invalid symbol keys.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// Symbol was empty or only whitespace.
    #[error("Symbol must not be empty")]
    Empty,

    /// Symbol contained characters outside `[A-Z0-9.-]`.
    #[error("Invalid symbol: {0}")]
    InvalidCharacter(String),
}

/// Error for series that violate ordering or value invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// Timestamps are not strictly ascending.
    #[error("Bar {index} is not after the previous bar (timestamp {timestamp})")]
    Unordered {
        /// Position of the offending bar.
        index: usize,
        /// Unix timestamp of the offending bar.
        timestamp: i64,
    },

    /// Volume is negative or not a number.
    #[error("Bar {index} has invalid volume {volume}")]
    InvalidVolume {
        /// Position of the offending bar.
        index: usize,
        /// The rejected volume.
        volume: f64,
    },

    /// Timestamp is outside the representable range.
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
}
