//! OKX public REST payload types.

use serde::Deserialize;

/// Envelope shared by OKX market endpoints. `code` is `"0"` on success; a
/// non-zero code is an error reported inside a 200 response.
#[derive(Debug, Deserialize)]
pub struct OkxResponse<T> {
    pub code: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Ticker record; `last` is the last traded price as a decimal string.
#[derive(Debug, Deserialize)]
pub struct Ticker {
    #[serde(rename = "instId")]
    pub inst_id: String,
    pub last: String,
}

/// Candle records are fixed-position arrays of strings:
/// `[ts, open, high, low, close, vol, ...]`, returned newest-first.
pub type CandleRecord = Vec<String>;
