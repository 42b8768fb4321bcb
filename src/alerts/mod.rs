//! RSI threshold evaluation and alert publication.

pub mod webhook;

pub use webhook::WebhookNotifier;

use crate::error::MonitorError;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// RSI level above which an overbought alert fires.
pub const OVERBOUGHT_THRESHOLD: f64 = 70.0;
/// RSI level below which an oversold alert fires.
pub const OVERSOLD_THRESHOLD: f64 = 30.0;
/// Fixed subject line carried by every alert.
pub const ALERT_SUBJECT: &str = "Price Monitor Alert";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Overbought,
    Oversold,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Overbought => write!(f, "Overbought"),
            AlertKind::Oversold => write!(f, "Oversold"),
        }
    }
}

/// Strict inequalities: an RSI of exactly 70 or 30 fires nothing.
pub fn evaluate(rsi: f64) -> Option<AlertKind> {
    if rsi > OVERBOUGHT_THRESHOLD {
        Some(AlertKind::Overbought)
    } else if rsi < OVERSOLD_THRESHOLD {
        Some(AlertKind::Oversold)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertMessage {
    pub subject: String,
    pub message: String,
}

impl AlertMessage {
    pub fn new(symbol: &str, price: f64, rsi: f64, kind: AlertKind) -> Self {
        Self {
            subject: ALERT_SUBJECT.to_string(),
            message: format!(
                "🚨 {} Alert!\nPrice: ${}\nRSI: {:.2} ({})",
                symbol, price, rsi, kind
            ),
        }
    }
}

/// Notification target. At most one publish per invocation.
#[async_trait]
pub trait AlertNotifier: Send + Sync {
    async fn publish(&self, alert: &AlertMessage) -> Result<(), MonitorError>;
}
