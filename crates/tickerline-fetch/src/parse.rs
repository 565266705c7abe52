//! Response body decoding.

use tickerline_catalog::Catalog;
use tickerline_types::{Series, Symbol};

use crate::FetchError;

/// Decodes a series body and checks it belongs to `symbol`.
///
/// Bars must be strictly ascending by timestamp with non-negative volume;
/// anything else is rejected as a parse error.
///
/// # Errors
///
/// Returns an error if the body is not a valid series for `symbol`.
pub fn parse_series(symbol: &Symbol, body: &[u8]) -> Result<Series, FetchError> {
    let series: Series = serde_json::from_slice(body).map_err(|source| FetchError::Parse {
        what: symbol.to_string(),
        source,
    })?;
    if series.symbol() != symbol {
        return Err(FetchError::SymbolMismatch {
            expected: symbol.to_string(),
            found: series.symbol().to_string(),
        });
    }
    Ok(series)
}

/// Decodes a catalog manifest body.
///
/// # Errors
///
/// Returns an error if the body is not a valid manifest.
pub fn parse_catalog(body: &[u8]) -> Result<Catalog, FetchError> {
    serde_json::from_slice(body).map_err(|source| FetchError::Parse {
        what: "catalog".into(),
        source,
    })
}
