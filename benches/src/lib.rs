//! Synthetic series for tickerline benchmarks.

use chrono::{Datelike, Days, NaiveDate, TimeZone, Utc};
use tickerline_lib::{Bar, Series, Symbol};

/// Shape of a generated series.
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    /// Ticker of the generated series.
    pub symbol: String,
    /// Date of the first bar.
    pub start: NaiveDate,
    /// Number of trading days to generate.
    pub trading_days: usize,
    /// Close of the first bar.
    pub start_price: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            symbol: "BENCH".to_string(),
            start: NaiveDate::from_ymd_opt(2000, 1, 3).unwrap_or_default(),
            trading_days: 5_000,
            start_price: 100.0,
        }
    }
}

impl SeriesConfig {
    /// Same shape with a different length.
    #[must_use]
    pub fn with_trading_days(mut self, trading_days: usize) -> Self {
        self.trading_days = trading_days;
        self
    }
}

/// Generates weekday bars with a deterministic price walk.
///
/// Returns `None` if the symbol is invalid.
#[must_use]
pub fn synthetic_series(config: &SeriesConfig) -> Option<Series> {
    let symbol = Symbol::new(&config.symbol).ok()?;
    let mut bars = Vec::with_capacity(config.trading_days);
    let mut date = config.start;
    let mut close = config.start_price;
    // xorshift keeps runs reproducible without a rand dependency
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;

    while bars.len() < config.trading_days {
        if date.weekday().number_from_monday() <= 5 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let step = (state % 2_001) as f64 / 1_000.0 - 1.0;
            let open = close;
            close = (close * (1.0 + step / 50.0)).max(0.01);
            let timestamp = Utc.from_utc_datetime(&date.and_hms_opt(14, 30, 0)?);
            bars.push(Bar::new(
                timestamp,
                open,
                open.max(close) * 1.01,
                open.min(close) * 0.99,
                close,
                1_000_000.0 + (state % 500_000) as f64,
            ));
        }
        date = date.checked_add_days(Days::new(1))?;
    }

    Series::new(symbol, bars).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_requested_length() {
        let series = synthetic_series(&SeriesConfig::default().with_trading_days(250)).unwrap();
        assert_eq!(series.len(), 250);
        assert!(series.bars().iter().all(|b| b.low <= b.close && b.close <= b.high));
    }

    #[test]
    fn test_is_deterministic() {
        let config = SeriesConfig::default().with_trading_days(50);
        assert_eq!(synthetic_series(&config), synthetic_series(&config));
    }
}
