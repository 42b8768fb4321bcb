//! Per-invocation orchestration.

use crate::alerts::{self, AlertMessage, AlertNotifier};
use crate::config::Config;
use crate::db::PriceHistoryStore;
use crate::error::MonitorError;
use crate::indicators::calculate_rsi_default;
use crate::models::{PriceSample, RunSummary};
use crate::series::{SeriesAssembler, MIN_SERIES_LEN};
use crate::services::MarketDataSource;
use tracing::{info, warn};

/// Execute one monitor invocation.
///
/// The quote fetch is the only fatal step. Store writes, warm-up fetches and
/// alert publication all degrade to a partial summary: the run reports the
/// current price even when auxiliary systems are unavailable.
pub async fn run_once(
    config: &Config,
    source: &dyn MarketDataSource,
    store: &dyn PriceHistoryStore,
    notifier: Option<&dyn AlertNotifier>,
) -> Result<RunSummary, MonitorError> {
    let symbol = config.symbol.as_str();
    let price = source.latest_price(symbol).await?;

    let timestamp = chrono::Utc::now().timestamp();
    let sample = PriceSample::new(symbol, timestamp, price);

    if let Err(e) = store.append(&sample).await {
        warn!(symbol = %symbol, error = %e, "failed to persist price sample, continuing");
    } else {
        info!(
            symbol = %symbol,
            timestamp,
            expires_at = sample.expires_at,
            "stored price sample"
        );
    }

    let series = SeriesAssembler::new(source, store).assemble(symbol).await;

    let rsi = if series.len() >= MIN_SERIES_LEN {
        calculate_rsi_default(&series)
    } else {
        info!(symbol = %symbol, points = series.len(), "not enough data for RSI this run");
        None
    };

    if let Some(rsi) = rsi {
        info!(symbol = %symbol, price, rsi, "computed RSI");
        if let (Some(kind), Some(notifier)) = (alerts::evaluate(rsi), notifier) {
            let alert = AlertMessage::new(symbol, price, rsi, kind);
            match notifier.publish(&alert).await {
                Ok(()) => info!(symbol = %symbol, kind = %kind, rsi, "alert published"),
                Err(e) => warn!(symbol = %symbol, error = %e, "alert publication failed"),
            }
        }
    }

    Ok(RunSummary {
        symbol: symbol.to_string(),
        price,
        timestamp,
        rsi,
        expires_at: sample.expires_at,
    })
}
