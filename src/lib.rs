//! Scheduled RSI price monitor.
//!
//! One invocation fetches the latest price for a configured symbol, persists
//! it to the history store, assembles a rolling price series (warming up from
//! remote candles when the store is thin), computes RSI and publishes an
//! overbought/oversold alert when thresholds are crossed.

pub mod alerts;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod series;
pub mod services;
