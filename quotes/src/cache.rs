//! TTL cache wrapper for quote providers.
//!
//! Fetched quotes stay fresh for a fixed window (five minutes by default)
//! so repeated comparisons against the same ticker don't hammer the
//! upstream API. Failures are never cached; the next lookup retries the
//! inner provider.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::debug;
use rustc_hash::FxHashMap;

use crate::QuoteProvider;
use crate::error::QuoteError;
use crate::types::StockQuote;

/// Default freshness window for cached quotes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Caches successful lookups from the inner provider.
///
/// Keys are uppercased, so "aapl" and "AAPL" share an entry.
pub struct CachedProvider<P> {
    inner: P,
    ttl: Duration,
    entries: Mutex<FxHashMap<String, (Instant, StockQuote)>>,
}

impl<P: QuoteProvider> CachedProvider<P> {
    /// Wrap `inner` with the default five-minute TTL.
    pub fn new(inner: P) -> Self {
        Self::with_ttl(inner, DEFAULT_TTL)
    }

    /// Wrap `inner` with a custom TTL.
    pub fn with_ttl(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(FxHashMap::default()),
        }
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: QuoteProvider> QuoteProvider for CachedProvider<P> {
    fn lookup(&self, ticker: &str) -> Result<StockQuote, QuoteError> {
        let key = ticker.trim().to_ascii_uppercase();

        if let Some((fetched, quote)) = self.entries.lock().unwrap().get(&key) {
            if fetched.elapsed() < self.ttl {
                debug!("quote cache hit for {key}");
                return Ok(quote.clone());
            }
        }

        let quote = self.inner.lookup(ticker)?;
        self.entries
            .lock()
            .unwrap()
            .insert(key, (Instant::now(), quote.clone()));
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockProvider;

    #[test]
    fn second_lookup_hits_the_cache() {
        let cached = CachedProvider::new(
            MockProvider::builder()
                .with_stock("AAPL", 185.0, "USD")
                .build(),
        );

        assert_eq!(cached.lookup("AAPL").unwrap().price, 185.0);
        assert_eq!(cached.lookup("AAPL").unwrap().price, 185.0);
        // Only the first call reached the inner provider.
        assert_eq!(cached.inner().recorded_lookups().len(), 1);
    }

    #[test]
    fn cache_keys_ignore_case_and_whitespace() {
        let cached = CachedProvider::new(
            MockProvider::builder()
                .with_stock("AAPL", 185.0, "USD")
                .build(),
        );

        let _ = cached.lookup("AAPL");
        let _ = cached.lookup(" aapl ");
        assert_eq!(cached.inner().recorded_lookups().len(), 1);
    }

    #[test]
    fn zero_ttl_always_refetches() {
        let cached = CachedProvider::with_ttl(
            MockProvider::builder()
                .with_stock("AAPL", 185.0, "USD")
                .build(),
            Duration::ZERO,
        );

        let _ = cached.lookup("AAPL");
        let _ = cached.lookup("AAPL");
        assert_eq!(cached.inner().recorded_lookups().len(), 2);
    }

    #[test]
    fn failures_are_not_cached() {
        let cached = CachedProvider::new(MockProvider::builder().fail_all().build());

        assert!(cached.lookup("AAPL").is_err());
        assert!(cached.lookup("AAPL").is_err());
        // Both calls retried the inner provider.
        assert_eq!(cached.inner().recorded_lookups().len(), 2);
    }
}
