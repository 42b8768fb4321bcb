//! Price observation and invocation output models.

use serde::{Deserialize, Serialize};

/// Seconds in 30 days; advisory deletion horizon for persisted samples.
pub const TTL_SECONDS: i64 = 60 * 60 * 24 * 30;

/// One persisted price observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSample {
    pub symbol: String,
    /// Observation time, epoch seconds. Sort key within a symbol.
    pub timestamp: i64,
    /// Text-encoded decimal; parsed to f64 only for indicator math so the
    /// persisted record never picks up new rounding artifacts.
    pub price: String,
    /// TTL hint for the store's garbage collection. Always timestamp + 30d.
    #[serde(rename = "expiresAt")]
    pub expires_at: i64,
}

impl PriceSample {
    pub fn new(symbol: impl Into<String>, timestamp: i64, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            timestamp,
            price: price.to_string(),
            expires_at: timestamp + TTL_SECONDS,
        }
    }

    /// Parsed price, or `None` when the stored text is not a number.
    pub fn price_f64(&self) -> Option<f64> {
        self.price.parse().ok()
    }
}

/// Structured result of one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub symbol: String,
    pub price: f64,
    pub timestamp: i64,
    /// `None` means "not enough data yet", not an error.
    pub rsi: Option<f64>,
    #[serde(rename = "expiresAt")]
    pub expires_at: i64,
}
