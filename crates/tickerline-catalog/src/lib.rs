//! Instrument catalog for tickerline.
//!
//! The catalog lists every instrument the data host publishes a series for,
//! with the date span each one covers. It is used to resolve symbols, to
//! drive the search box and to bound date-range pickers.
//!
//! # Example
//!
//! ```
//! use tickerline_catalog::Catalog;
//!
//! let json = r#"{"tickers":[{"s":"AAPL","n":"Apple Inc.","e":"NASDAQ","from":"1984-09-07","to":"2024-06-14","a":true}],"updated":"2024-06-15"}"#;
//! let catalog = Catalog::from_json(json).unwrap();
//!
//! if let Some(entry) = catalog.get("aapl") {
//!     println!("{}: {}", entry.symbol(), entry.name());
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tickerline/tickerline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tickerline_types::{CatalogEntry, Symbol};

/// Maximum number of results returned by [`Catalog::search`].
pub const SEARCH_LIMIT: usize = 50;

/// All instruments published by the data host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "CatalogWire", into = "CatalogWire")]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    updated: String,
    index: HashMap<Symbol, usize>,
}

impl Catalog {
    /// Builds a catalog from entries in publication order.
    ///
    /// When a symbol appears more than once, lookups resolve to its first
    /// occurrence.
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>, updated: impl Into<String>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            index.entry(entry.symbol().clone()).or_insert(position);
        }
        Self {
            entries,
            updated: updated.into(),
            index,
        }
    }

    /// Parses a manifest document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid manifest.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Looks up an entry by symbol (case-insensitive).
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&CatalogEntry> {
        let symbol = Symbol::new(symbol).ok()?;
        self.index.get(&symbol).map(|&i| &self.entries[i])
    }

    /// Returns true if the catalog contains the symbol.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.index.contains_key(symbol)
    }

    /// Returns all entries in publication order.
    pub fn all(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Returns the total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the date the manifest was generated.
    #[must_use]
    pub fn updated(&self) -> &str {
        &self.updated
    }

    /// Returns entries that are still listed.
    pub fn active(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|e| e.is_active())
    }

    /// Returns entries that have been delisted.
    pub fn delisted(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|e| e.is_delisted())
    }

    /// Searches by symbol prefix, then by name prefix.
    ///
    /// Symbol matches come first, in catalog order; name matches that were not
    /// already symbol matches follow. At most [`SEARCH_LIMIT`] entries are
    /// returned. An empty query returns nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        if query.is_empty() {
            return Vec::new();
        }
        let upper = query.to_uppercase();
        let lower = query.to_lowercase();

        let by_symbol = self
            .entries
            .iter()
            .filter(|e| e.symbol().as_str().starts_with(&upper));
        let by_name = self.entries.iter().filter(|e| {
            e.name().to_lowercase().starts_with(&lower) && !e.symbol().as_str().starts_with(&upper)
        });

        by_symbol.chain(by_name).take(SEARCH_LIMIT).collect()
    }
}

/// Manifest wire shape: `{ "tickers": [...], "updated": "YYYY-MM-DD" }`.
#[derive(Serialize, Deserialize)]
struct CatalogWire {
    tickers: Vec<CatalogEntry>,
    #[serde(default)]
    updated: String,
}

impl From<CatalogWire> for Catalog {
    fn from(wire: CatalogWire) -> Self {
        Self::new(wire.tickers, wire.updated)
    }
}

impl From<Catalog> for CatalogWire {
    fn from(catalog: Catalog) -> Self {
        Self {
            tickers: catalog.entries,
            updated: catalog.updated,
        }
    }
}
