//! Shared quote types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resolved stock quote: current price plus the metadata used for
/// category inference and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    pub ticker: String,
    /// Long display name; falls back to the ticker when unknown.
    pub name: String,
    /// Trading currency code, e.g. "USD" or "CAD".
    pub currency: String,
    /// Regular market price, in `currency`.
    pub price: f64,
    /// Instrument type reported by the source, e.g. "EQUITY" or "ETF".
    pub quote_type: Option<String>,
    /// Primary exchange code, e.g. "NMS" or "TSX".
    pub exchange: Option<String>,
    /// Recent daily candles, oldest first (roughly 30 days).
    pub history: Vec<Candle>,
}

/// One daily OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub ts: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl StockQuote {
    /// True when the source reports this instrument as an ETF.
    pub fn is_etf(&self) -> bool {
        self.quote_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("etf"))
    }

    /// True when the instrument trades in Canadian dollars.
    pub fn is_cad(&self) -> bool {
        self.currency.eq_ignore_ascii_case("cad")
    }

    /// Low and high over the recorded history window, if any.
    pub fn range(&self) -> Option<(f64, f64)> {
        if self.history.is_empty() {
            return None;
        }
        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;
        for candle in &self.history {
            low = low.min(candle.low);
            high = high.max(candle.high);
        }
        Some((low, high))
    }
}
