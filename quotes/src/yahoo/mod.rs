//! Yahoo Finance quote provider.

pub mod client;
pub mod types;

use crate::QuoteProvider;
use crate::error::QuoteError;
use crate::types::StockQuote;
use client::ChartClient;

/// Quote provider backed by the Yahoo Finance v8 chart API.
///
/// A single request per lookup returns the regular market price, currency,
/// instrument type, exchange, display name and about 30 days of daily
/// candles. Blocking (sync) via reqwest::blocking.
pub struct YahooProvider {
    client: ChartClient,
}

impl YahooProvider {
    pub fn new() -> Self {
        Self {
            client: ChartClient::new(),
        }
    }

    /// Point the provider at a different base URL (tests, proxies).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: ChartClient::with_base_url(base_url),
        }
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteProvider for YahooProvider {
    fn lookup(&self, ticker: &str) -> Result<StockQuote, QuoteError> {
        let ticker = ticker.trim();
        let valid = !ticker.is_empty()
            && ticker
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='));
        if !valid {
            return Err(QuoteError::InvalidTicker(ticker.to_string()));
        }

        let response = self.client.chart(ticker, "1mo", "1d")?;
        types::into_quote(ticker, response)
    }
}
