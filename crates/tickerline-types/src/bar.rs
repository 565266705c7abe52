//! OHLCV bar representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SeriesError;

/// One OHLCV bar (a trading day, or a week/month after aggregation).
///
/// On the wire a bar is the 6-element array
/// `[timestamp, open, high, low, close, volume]` with the timestamp in
/// whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBar", into = "RawBar")]
pub struct Bar {
    /// Bar timestamp (UTC).
    pub timestamp: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl Bar {
    /// Creates a new bar.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns the timestamp as whole seconds since the Unix epoch.
    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.timestamp.timestamp()
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if the bar closed above its open.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if the bar closed below its open.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

/// Bar as it appears on the wire, before timestamp conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawBar(pub i64, pub f64, pub f64, pub f64, pub f64, pub f64);

impl TryFrom<RawBar> for Bar {
    type Error = SeriesError;

    fn try_from(raw: RawBar) -> Result<Self, Self::Error> {
        let RawBar(seconds, open, high, low, close, volume) = raw;
        let timestamp =
            DateTime::from_timestamp(seconds, 0).ok_or(SeriesError::TimestampOutOfRange(seconds))?;
        Ok(Self::new(timestamp, open, high, low, close, volume))
    }
}

impl From<Bar> for RawBar {
    fn from(bar: Bar) -> Self {
        Self(
            bar.unix_seconds(),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume,
        )
    }
}
