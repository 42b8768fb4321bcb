//! Technical indicators.

pub mod momentum;

pub use momentum::rsi::{calculate_rsi, calculate_rsi_default, RSI_PERIOD};
