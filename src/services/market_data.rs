//! Market data source interface the monitor core depends on.

use crate::error::MonitorError;
use async_trait::async_trait;

#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Latest traded price for a symbol. Single attempt, no retries; the only
    /// fatal call in a run.
    async fn latest_price(&self, symbol: &str) -> Result<f64, MonitorError>;

    /// Up to `limit` historical closing prices, oldest-first, for RSI warm-up.
    async fn recent_closes(&self, symbol: &str, limit: usize)
        -> Result<Vec<f64>, MonitorError>;
}
