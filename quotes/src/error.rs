//! Quote lookup error types.

/// Errors that can occur while resolving a ticker.
///
/// All of these are recoverable: a comparison proceeds with manually
/// entered inputs when a lookup fails.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("invalid ticker: {0:?}")]
    InvalidTicker(String),

    #[error("no data for ticker {0}")]
    NotFound(String),

    #[error("quote request failed: {0}")]
    Http(String),

    #[error("quote data unavailable: {0}")]
    Unavailable(String),

    #[error("failed to parse quote response: {0}")]
    Parse(String),
}
