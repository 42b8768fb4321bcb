//! Error taxonomy for a monitor invocation.
//!
//! Only `QuoteUnavailable` aborts a run. Every other kind degrades to a
//! partial result: the invocation still reports the current price even when
//! auxiliary systems are down.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    /// Quote fetch failed or returned a malformed/error payload. Fatal.
    #[error("quote unavailable for {symbol}: {reason}")]
    QuoteUnavailable { symbol: String, reason: String },

    /// Warm-up candle fetch failed. Treated as "no warm-up data available".
    #[error("candle fetch failed for {symbol}: {reason}")]
    CandleFetchFailed { symbol: String, reason: String },

    /// History append failed. Logged, run continues on queryable history.
    #[error("store write failed: {0}")]
    StoreWriteFailed(String),

    /// History query failed. Treated as "no history available".
    #[error("store query failed: {0}")]
    StoreQueryFailed(String),

    /// Alert publication failed. Logged, run continues.
    #[error("notification failed: {0}")]
    NotifyFailed(String),
}
