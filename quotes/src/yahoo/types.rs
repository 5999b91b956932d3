//! Yahoo chart API response types and their conversion to [`StockQuote`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::QuoteError;
use crate::types::{Candle, StockQuote};

/// Top-level chart response envelope.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Error object Yahoo returns for unknown symbols.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: Meta,
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub symbol: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub exchange_name: Option<String>,
    #[serde(default)]
    pub full_exchange_name: Option<String>,
    #[serde(default)]
    pub instrument_type: Option<String>,
    #[serde(default)]
    pub regular_market_price: Option<f64>,
    #[serde(default)]
    pub chart_previous_close: Option<f64>,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

/// Parallel OHLCV arrays; entries are null for halted or missing sessions.
#[derive(Debug, Deserialize)]
pub struct QuoteBlock {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

/// Convert a chart response into a [`StockQuote`].
///
/// Price resolution falls back from the regular market price to the
/// previous close. Candles with missing fields are skipped.
pub fn into_quote(ticker: &str, response: ChartResponse) -> Result<StockQuote, QuoteError> {
    if let Some(err) = response.chart.error {
        let detail = err.description.unwrap_or(err.code);
        return Err(QuoteError::NotFound(format!("{ticker}: {detail}")));
    }

    let result = response
        .chart
        .result
        .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
        .ok_or_else(|| QuoteError::NotFound(ticker.to_string()))?;

    let price = result
        .meta
        .regular_market_price
        .or(result.meta.chart_previous_close)
        .ok_or_else(|| QuoteError::Unavailable(format!("no price for {ticker}")))?;

    let history = collect_candles(&result);
    let meta = result.meta;

    Ok(StockQuote {
        ticker: meta.symbol,
        name: meta
            .long_name
            .or(meta.short_name)
            .unwrap_or_else(|| ticker.to_ascii_uppercase()),
        currency: meta.currency.unwrap_or_else(|| "USD".to_string()),
        price,
        quote_type: meta.instrument_type,
        exchange: meta.exchange_name.or(meta.full_exchange_name),
        history,
    })
}

fn collect_candles(result: &ChartResult) -> Vec<Candle> {
    let Some(timestamps) = &result.timestamp else {
        return Vec::new();
    };
    let Some(quote) = result.indicators.quote.first() else {
        return Vec::new();
    };

    let mut candles = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let bar = (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
        );
        let (Some(open), Some(high), Some(low), Some(close)) = bar else {
            continue;
        };
        let Some(ts) = DateTime::<Utc>::from_timestamp(ts, 0) else {
            continue;
        };
        candles.push(Candle {
            ts,
            open,
            high,
            low,
            close,
            volume: quote.volume.get(i).copied().flatten().unwrap_or(0),
        });
    }
    candles
}
