//! Process configuration loaded once from the environment.
//!
//! Built a single time in `main` and passed explicitly into the orchestrator;
//! no module-level mutable state.

use std::env;

pub const DEFAULT_SYMBOL: &str = "BTC-USDT";
pub const DEFAULT_HISTORY_TABLE: &str = "price_history";
pub const DEFAULT_OKX_BASE_URL: &str = "https://www.okx.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Instrument to monitor. Fixed per process, never derived from a trigger.
    pub symbol: String,
    /// History store table name.
    pub history_table: String,
    /// Alert webhook target. Absent disables alerting entirely.
    pub alert_webhook_url: Option<String>,
    /// Exchange base URL, overridable so tests can point at a mock server.
    pub okx_base_url: String,
    /// QuestDB connection string (PGWire).
    pub questdb_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            symbol: env::var("SYMBOL").unwrap_or_else(|_| DEFAULT_SYMBOL.to_string()),
            history_table: env::var("HISTORY_TABLE")
                .unwrap_or_else(|_| DEFAULT_HISTORY_TABLE.to_string()),
            alert_webhook_url: env::var("ALERT_WEBHOOK_URL").ok().filter(|v| !v.is_empty()),
            okx_base_url: env::var("OKX_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OKX_BASE_URL.to_string()),
            questdb_url: get_questdb_url(),
        }
    }
}

pub fn get_questdb_url() -> String {
    env::var("QUESTDB_URL").unwrap_or_else(|_| {
        "host=localhost port=8812 user=admin password=quest dbname=qdb".to_string()
    })
}

pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
