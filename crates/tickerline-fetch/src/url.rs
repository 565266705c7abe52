//! Data host URL layout.

use tickerline_types::Symbol;

/// Default base URL of the data host.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173/data";

/// Builds the URL of one instrument's series.
///
/// URL format: `{base}/tickers/{SYMBOL}.json`
///
/// # Example
///
/// ```
/// use tickerline_fetch::url::series_url;
/// use tickerline_types::Symbol;
///
/// let symbol = Symbol::new("aapl").unwrap();
/// let url = series_url("https://example.com/data", &symbol);
/// assert_eq!(url, "https://example.com/data/tickers/AAPL.json");
/// ```
#[must_use]
pub fn series_url(base: &str, symbol: &Symbol) -> String {
    format!("{}/tickers/{}.json", base.trim_end_matches('/'), symbol)
}

/// Builds the URL of the catalog manifest.
///
/// URL format: `{base}/manifest.json`
#[must_use]
pub fn catalog_url(base: &str) -> String {
    format!("{}/manifest.json", base.trim_end_matches('/'))
}
