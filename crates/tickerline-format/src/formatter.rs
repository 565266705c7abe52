//! Output format abstraction.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tickerline_transform::ComparisonLine;
use tickerline_types::Bar;

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes bars, one record per bar.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_bars<W: Write + Send>(&self, bars: &[Bar], writer: W) -> Result<(), FormatError>;

    /// Writes normalized comparison lines, one record per symbol and point.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_lines<W: Write + Send>(
        &self,
        lines: &[ComparisonLine],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

/// Flat record for one bar.
#[derive(Debug, Serialize)]
pub(crate) struct BarRecord {
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) open: f64,
    pub(crate) high: f64,
    pub(crate) low: f64,
    pub(crate) close: f64,
    pub(crate) volume: f64,
}

impl From<&Bar> for BarRecord {
    fn from(bar: &Bar) -> Self {
        Self {
            timestamp: bar.timestamp,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
        }
    }
}

/// Flat record for one normalized point.
#[derive(Debug, Serialize)]
pub(crate) struct PointRecord<'a> {
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) symbol: &'a str,
    pub(crate) value: f64,
}

/// Flattens comparison lines into long-form records.
pub(crate) fn point_records(lines: &[ComparisonLine]) -> impl Iterator<Item = PointRecord<'_>> {
    lines.iter().flat_map(|line| {
        line.points.iter().map(move |point| PointRecord {
            timestamp: point.timestamp,
            symbol: line.symbol.as_str(),
            value: point.value,
        })
    })
}
