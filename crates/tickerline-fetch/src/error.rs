//! Fetch errors.

use thiserror::Error;

/// Errors that can occur while fetching a series or the catalog.
///
/// The `Display` output is what the loader reports for a failed symbol, so
/// each message names the resource it concerns.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed before a response arrived.
    #[error("Failed to load {what}: {source}")]
    Http {
        /// Symbol or "catalog".
        what: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("Failed to load {what}: {status}")]
    Status {
        /// Symbol or "catalog".
        what: String,
        /// HTTP status code.
        status: u16,
    },

    /// Body was not a valid document.
    #[error("Invalid data for {what}: {source}")]
    Parse {
        /// Symbol or "catalog".
        what: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Body was a series for a different symbol.
    #[error("Expected series for {expected}, got {found}")]
    SymbolMismatch {
        /// Symbol requested.
        expected: String,
        /// Symbol in the body.
        found: String,
    },

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_resource() {
        let err = FetchError::Status {
            what: "AAPL".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Failed to load AAPL: 404");

        let err = FetchError::Status {
            what: "catalog".into(),
            status: 500,
        };
        assert_eq!(err.to_string(), "Failed to load catalog: 500");
    }

    #[test]
    fn test_mismatch_message() {
        let err = FetchError::SymbolMismatch {
            expected: "AAPL".into(),
            found: "MSFT".into(),
        };
        assert_eq!(err.to_string(), "Expected series for AAPL, got MSFT");
    }
}
