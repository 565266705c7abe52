//! Daily price series for one symbol.

use serde::{Deserialize, Serialize};

use crate::{Bar, SeriesError, Symbol};

/// Ordered OHLCV bars for one symbol.
///
/// Bars are strictly ascending by timestamp and carry non-negative volume.
/// A series is never mutated after construction; transforms produce new
/// bar sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesWire", into = "SeriesWire")]
pub struct Series {
    symbol: Symbol,
    bars: Vec<Bar>,
}

impl Series {
    /// Creates a validated series.
    ///
    /// # Errors
    ///
    /// Returns an error if timestamps are not strictly ascending or a volume
    /// is negative or NaN.
    pub fn new(symbol: Symbol, bars: Vec<Bar>) -> Result<Self, SeriesError> {
        for (index, bar) in bars.iter().enumerate() {
            if bar.volume.is_nan() || bar.volume < 0.0 {
                return Err(SeriesError::InvalidVolume {
                    index,
                    volume: bar.volume,
                });
            }
        }
        if let Some(index) = bars
            .windows(2)
            .position(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            return Err(SeriesError::Unordered {
                index: index + 1,
                timestamp: bars[index + 1].unix_seconds(),
            });
        }
        Ok(Self { symbol, bars })
    }

    /// Returns the symbol this series belongs to.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Returns the bars in ascending timestamp order.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true if the series has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns the earliest bar.
    #[must_use]
    pub fn first(&self) -> Option<&Bar> {
        self.bars.first()
    }

    /// Returns the latest bar.
    #[must_use]
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }
}

impl AsRef<[Bar]> for Series {
    fn as_ref(&self) -> &[Bar] {
        &self.bars
    }
}

/// Wire shape: `{ "symbol": "AAPL", "data": [[ts, o, h, l, c, v], ...] }`.
#[derive(Serialize, Deserialize)]
struct SeriesWire {
    symbol: Symbol,
    data: Vec<Bar>,
}

impl TryFrom<SeriesWire> for Series {
    type Error = SeriesError;

    fn try_from(wire: SeriesWire) -> Result<Self, Self::Error> {
        Self::new(wire.symbol, wire.data)
    }
}

impl From<Series> for SeriesWire {
    fn from(series: Series) -> Self {
        Self {
            symbol: series.symbol,
            data: series.bars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn bar(day: u32, close: f64, volume: f64) -> Bar {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
        Bar::new(timestamp, close, close, close, close, volume)
    }

    fn aapl() -> Symbol {
        Symbol::new("AAPL").unwrap()
    }

    #[test]
    fn test_series_new() {
        let series = Series::new(aapl(), vec![bar(2, 100.0, 10.0), bar(3, 101.0, 5.0)]).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.symbol().as_str(), "AAPL");
        assert!((series.last().unwrap().close - 101.0).abs() < 1e-10);
    }

    #[test]
    fn test_series_rejects_duplicate_timestamps() {
        let err = Series::new(aapl(), vec![bar(2, 100.0, 1.0), bar(2, 101.0, 1.0)]).unwrap_err();
        assert!(matches!(err, SeriesError::Unordered { index: 1, .. }));
    }

    #[test]
    fn test_series_rejects_descending() {
        let err = Series::new(aapl(), vec![bar(3, 100.0, 1.0), bar(2, 101.0, 1.0)]).unwrap_err();
        assert!(matches!(err, SeriesError::Unordered { index: 1, .. }));
    }

    #[test]
    fn test_series_rejects_negative_volume() {
        let err = Series::new(aapl(), vec![bar(2, 100.0, -1.0)]).unwrap_err();
        assert!(matches!(err, SeriesError::InvalidVolume { index: 0, .. }));
    }

    #[test]
    fn test_series_wire_format() {
        let json = r#"{"symbol":"aapl","data":[[1704153600,1,2,0.5,1.5,100],[1704240000,1.5,2,1,1.8,50]]}"#;
        let series: Series = serde_json::from_str(json).unwrap();

        assert_eq!(series.symbol().as_str(), "AAPL");
        assert_eq!(series.len(), 2);

        let unordered = r#"{"symbol":"AAPL","data":[[1704240000,1,1,1,1,1],[1704153600,1,1,1,1,1]]}"#;
        assert!(serde_json::from_str::<Series>(unordered).is_err());
    }

    #[test]
    fn test_empty_series_is_valid() {
        let series = Series::new(aapl(), Vec::new()).unwrap();
        assert!(series.is_empty());
        assert!(series.first().is_none());
    }
}
