//! Mock quote provider for testing, no network calls.
//!
//! ```
//! use feewise_quotes::{MockProvider, QuoteProvider};
//!
//! let provider = MockProvider::builder()
//!     .with_stock("AAPL", 185.0, "USD")
//!     .build();
//!
//! assert_eq!(provider.lookup("AAPL").unwrap().price, 185.0);
//! assert!(provider.lookup("MSFT").is_err());
//! ```

use std::sync::Mutex;

use crate::QuoteProvider;
use crate::error::QuoteError;
use crate::types::StockQuote;

/// Builder for `MockProvider`.
#[derive(Default)]
pub struct MockProviderBuilder {
    quotes: Vec<StockQuote>,
    fail_all: bool,
}

impl MockProviderBuilder {
    /// Add a fully specified quote.
    pub fn with_quote(mut self, quote: StockQuote) -> Self {
        self.quotes.push(quote);
        self
    }

    /// Add a plain stock with no history.
    pub fn with_stock(self, ticker: &str, price: f64, currency: &str) -> Self {
        let quote = StockQuote {
            ticker: ticker.to_string(),
            name: ticker.to_string(),
            currency: currency.to_string(),
            price,
            quote_type: Some("EQUITY".into()),
            exchange: None,
            history: Vec::new(),
        };
        self.with_quote(quote)
    }

    /// Add an ETF with no history.
    pub fn with_etf(self, ticker: &str, price: f64, currency: &str) -> Self {
        let quote = StockQuote {
            ticker: ticker.to_string(),
            name: ticker.to_string(),
            currency: currency.to_string(),
            price,
            quote_type: Some("ETF".into()),
            exchange: None,
            history: Vec::new(),
        };
        self.with_quote(quote)
    }

    /// Make every lookup fail with `QuoteError::Unavailable`.
    pub fn fail_all(mut self) -> Self {
        self.fail_all = true;
        self
    }

    pub fn build(self) -> MockProvider {
        MockProvider {
            quotes: self.quotes,
            fail_all: self.fail_all,
            lookups: Mutex::new(Vec::new()),
        }
    }
}

/// In-memory quote provider with configurable behavior.
pub struct MockProvider {
    quotes: Vec<StockQuote>,
    fail_all: bool,
    lookups: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn builder() -> MockProviderBuilder {
        MockProviderBuilder::default()
    }

    /// Tickers looked up so far, in order. For assertions in tests.
    pub fn recorded_lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl QuoteProvider for MockProvider {
    fn lookup(&self, ticker: &str) -> Result<StockQuote, QuoteError> {
        self.lookups.lock().unwrap().push(ticker.to_string());

        if self.fail_all {
            return Err(QuoteError::Unavailable("mock provider set to fail".into()));
        }

        self.quotes
            .iter()
            .find(|q| q.ticker.eq_ignore_ascii_case(ticker))
            .cloned()
            .ok_or_else(|| QuoteError::NotFound(ticker.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_configured_quote() {
        let provider = MockProvider::builder()
            .with_etf("VFV.TO", 140.0, "CAD")
            .build();
        let quote = provider.lookup("vfv.to").unwrap();
        assert_eq!(quote.price, 140.0);
        assert!(quote.is_etf());
        assert!(quote.is_cad());
    }

    #[test]
    fn unknown_ticker_is_not_found() {
        let provider = MockProvider::builder().build();
        assert!(matches!(
            provider.lookup("AAPL"),
            Err(QuoteError::NotFound(_))
        ));
    }

    #[test]
    fn fail_all_fails_everything() {
        let provider = MockProvider::builder()
            .with_stock("AAPL", 185.0, "USD")
            .fail_all()
            .build();
        assert!(matches!(
            provider.lookup("AAPL"),
            Err(QuoteError::Unavailable(_))
        ));
    }

    #[test]
    fn lookups_are_recorded() {
        let provider = MockProvider::builder()
            .with_stock("AAPL", 185.0, "USD")
            .build();
        let _ = provider.lookup("AAPL");
        let _ = provider.lookup("MSFT");
        assert_eq!(provider.recorded_lookups(), vec!["AAPL", "MSFT"]);
    }
}
