//! OKX public market data client.

mod messages;

pub use messages::{CandleRecord, OkxResponse, Ticker};

use crate::error::MonitorError;
use crate::services::market_data::MarketDataSource;
use async_trait::async_trait;
use tracing::debug;

/// Index of the closing price inside an OKX candle record.
const CANDLE_CLOSE_IDX: usize = 4;

pub struct OkxClient {
    base_url: String,
    http: reqwest::Client,
}

impl OkxClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Injectable HTTP client, used by tests to point at a mock server.
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    fn quote_err(symbol: &str, reason: impl Into<String>) -> MonitorError {
        MonitorError::QuoteUnavailable {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }

    fn candle_err(symbol: &str, reason: impl Into<String>) -> MonitorError {
        MonitorError::CandleFetchFailed {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl MarketDataSource for OkxClient {
    async fn latest_price(&self, symbol: &str) -> Result<f64, MonitorError> {
        let url = format!("{}/api/v5/market/ticker", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("instId", symbol)])
            .send()
            .await
            .map_err(|e| Self::quote_err(symbol, e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::quote_err(
                symbol,
                format!("http status {}", response.status()),
            ));
        }

        let body: OkxResponse<Ticker> = response
            .json()
            .await
            .map_err(|e| Self::quote_err(symbol, format!("malformed ticker payload: {}", e)))?;

        if body.code != "0" {
            return Err(Self::quote_err(
                symbol,
                format!("exchange error code {}", body.code),
            ));
        }

        let ticker = body
            .data
            .first()
            .ok_or_else(|| Self::quote_err(symbol, "empty ticker data"))?;

        let price: f64 = ticker.last.parse().map_err(|_| {
            Self::quote_err(symbol, format!("unparseable last price '{}'", ticker.last))
        })?;

        if price <= 0.0 {
            return Err(Self::quote_err(
                symbol,
                format!("non-positive last price {}", price),
            ));
        }

        debug!(symbol = %symbol, price = price, "fetched latest price");
        Ok(price)
    }

    async fn recent_closes(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<f64>, MonitorError> {
        let url = format!("{}/api/v5/market/candles", self.base_url);
        let limit_param = limit.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[("instId", symbol), ("limit", limit_param.as_str())])
            .send()
            .await
            .map_err(|e| Self::candle_err(symbol, e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::candle_err(
                symbol,
                format!("http status {}", response.status()),
            ));
        }

        let body: OkxResponse<CandleRecord> = response
            .json()
            .await
            .map_err(|e| Self::candle_err(symbol, format!("malformed candle payload: {}", e)))?;

        if body.code != "0" {
            return Err(Self::candle_err(
                symbol,
                format!("exchange error code {}", body.code),
            ));
        }

        // OKX returns candles newest-first; reverse to oldest-first for the
        // indicator window.
        let mut closes = Vec::with_capacity(body.data.len());
        for candle in body.data.iter().rev() {
            let close = candle
                .get(CANDLE_CLOSE_IDX)
                .ok_or_else(|| Self::candle_err(symbol, "candle record too short"))?;
            let close: f64 = close
                .parse()
                .map_err(|_| Self::candle_err(symbol, format!("unparseable close '{}'", close)))?;
            closes.push(close);
        }

        debug!(symbol = %symbol, count = closes.len(), "fetched warm-up candles");
        Ok(closes)
    }
}
