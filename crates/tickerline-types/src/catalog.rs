//! Instrument catalog entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Describes one instrument available from the data host.
///
/// Field names follow the compact manifest layout
/// (`s`, `n`, `e`, `from`, `to`, `a`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Ticker symbol (e.g., "AAPL").
    #[serde(rename = "s")]
    symbol: Symbol,
    /// Company or fund name.
    #[serde(rename = "n")]
    name: String,
    /// Listing exchange (e.g., "NASDAQ", "NYSE").
    #[serde(rename = "e")]
    exchange: String,
    /// First day with data.
    from: NaiveDate,
    /// Last day with data.
    to: NaiveDate,
    /// False once the instrument is delisted.
    #[serde(rename = "a")]
    active: bool,
}

impl CatalogEntry {
    /// Creates a new catalog entry.
    #[must_use]
    pub fn new(
        symbol: Symbol,
        name: impl Into<String>,
        exchange: impl Into<String>,
        from: NaiveDate,
        to: NaiveDate,
        active: bool,
    ) -> Self {
        Self {
            symbol,
            name: name.into(),
            exchange: exchange.into(),
            from,
            to,
            active,
        }
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the listing exchange.
    #[must_use]
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// Returns the first day with data.
    #[must_use]
    pub const fn first_date(&self) -> NaiveDate {
        self.from
    }

    /// Returns the last day with data.
    #[must_use]
    pub const fn last_date(&self) -> NaiveDate {
        self.to
    }

    /// Returns the `(min, max)` dates used to bound window pickers.
    #[must_use]
    pub const fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.from, self.to)
    }

    /// Returns true if the instrument is still listed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true if the instrument has been delisted.
    #[must_use]
    pub const fn is_delisted(&self) -> bool {
        !self.active
    }

    /// Returns "Active" or "Delisted".
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.active { "Active" } else { "Delisted" }
    }

    /// Returns true if data is available for the given date.
    #[must_use]
    pub fn has_data_for(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

impl std::fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}
