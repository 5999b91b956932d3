//! Yahoo Finance v8 chart API client.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use super::types::ChartResponse;
use crate::error::QuoteError;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

// Yahoo rejects requests carrying reqwest's default user agent.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; feewise)";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking chart API client.
pub struct ChartClient {
    client: Client,
    base_url: String,
}

impl ChartClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch chart data for `ticker` (GET /v8/finance/chart/{ticker}).
    pub fn chart(
        &self,
        ticker: &str,
        range: &str,
        interval: &str,
    ) -> Result<ChartResponse, QuoteError> {
        let url = format!(
            "{}/v8/finance/chart/{ticker}?range={range}&interval={interval}",
            self.base_url
        );
        debug!("fetching {url}");

        let resp = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .map_err(|e| QuoteError::Http(format!("chart request failed: {e}")))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(QuoteError::NotFound(ticker.to_string()));
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            return Err(QuoteError::Http(format!("chart returned {status}: {body}")));
        }

        resp.json::<ChartResponse>()
            .map_err(|e| QuoteError::Parse(format!("failed to parse chart response: {e}")))
    }
}

impl Default for ChartClient {
    fn default() -> Self {
        Self::new()
    }
}
