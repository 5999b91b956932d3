//! Stock quote providers for feewise.
//!
//! Provides a generic `QuoteProvider` trait over market data sources.
//! Implementations:
//!
//! - **Yahoo Finance** (feature `yahoo`): blocking client for the v8 chart API
//! - **MockProvider**: configurable in-memory provider for tests
//! - **CachedProvider**: TTL cache wrapper around any provider
//!
//! Quote lookups are a convenience for filling in comparison inputs, never
//! a requirement: every failure is a recoverable [`QuoteError`] and callers
//! fall back to manually entered amounts and categories.

pub mod cache;
pub mod detect;
pub mod error;
pub mod mock;
pub mod types;

#[cfg(feature = "yahoo")]
pub mod yahoo;

pub use cache::CachedProvider;
pub use detect::detect_category;
pub use error::QuoteError;
pub use mock::MockProvider;
pub use types::{Candle, StockQuote};

/// A market data source that can resolve a ticker to a current quote.
pub trait QuoteProvider {
    /// Resolve `ticker` to a current price plus the metadata and recent
    /// history used for display and category inference.
    fn lookup(&self, ticker: &str) -> Result<StockQuote, QuoteError>;
}
