//! Assembles the oldest-first price series the RSI engine consumes.
//!
//! History comes from the store; when the store is thin the series is warmed
//! up with remote candles and de-duplicated across the combined sequence.

use crate::db::PriceHistoryStore;
use crate::services::MarketDataSource;
use tracing::{info, warn};

/// How many stored samples one history query pulls back.
pub const HISTORY_QUERY_LIMIT: usize = 30;
/// Below this many stored samples the history is considered insufficient.
pub const WARMUP_THRESHOLD: usize = 15;
/// How many remote candles a warm-up fetch requests.
pub const WARMUP_CANDLE_LIMIT: usize = 30;
/// Minimum assembled length for RSI to be attempted at all.
pub const MIN_SERIES_LEN: usize = 15;

pub struct SeriesAssembler<'a> {
    source: &'a dyn MarketDataSource,
    store: &'a dyn PriceHistoryStore,
}

impl<'a> SeriesAssembler<'a> {
    pub fn new(source: &'a dyn MarketDataSource, store: &'a dyn PriceHistoryStore) -> Self {
        Self { source, store }
    }

    /// Produce the oldest-first series for `symbol`.
    ///
    /// The store-only path performs no candle fetch and no de-duplication.
    /// The warm-up path concatenates remote closes before stored prices and
    /// keeps the first occurrence of each exact value; when warm-up yields
    /// nothing the series is empty regardless of the store remnant.
    pub async fn assemble(&self, symbol: &str) -> Vec<f64> {
        let stored = match self.store.query_recent(symbol, HISTORY_QUERY_LIMIT).await {
            Ok(samples) => samples,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "history query failed, assembling without stored samples");
                Vec::new()
            }
        };

        // The store returns newest-first; the indicator wants oldest-first.
        let stored_oldest_first: Vec<f64> =
            stored.iter().rev().filter_map(|s| s.price_f64()).collect();

        if stored.len() >= WARMUP_THRESHOLD {
            return stored_oldest_first;
        }

        info!(
            symbol = %symbol,
            stored = stored.len(),
            threshold = WARMUP_THRESHOLD,
            "stored history insufficient, fetching remote candles for warm-up"
        );

        let remote = match self.source.recent_closes(symbol, WARMUP_CANDLE_LIMIT).await {
            Ok(closes) => closes,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "warm-up candle fetch failed");
                Vec::new()
            }
        };

        if remote.is_empty() {
            return Vec::new();
        }

        let mut combined = remote;
        combined.extend(stored_oldest_first);
        dedup_first_seen(combined)
    }
}

/// Keep the first occurrence of each exact value, preserving relative order.
///
/// Applied across the whole combined sequence, not just the source seam, so a
/// price repeated at different times collapses to one entry.
fn dedup_first_seen(values: Vec<f64>) -> Vec<f64> {
    let mut kept: Vec<f64> = Vec::with_capacity(values.len());
    for v in values {
        if !kept.iter().any(|k| k.to_bits() == v.to_bits()) {
            kept.push(v);
        }
    }
    kept
}
