//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss

/// Default lookback window.
pub const RSI_PERIOD: u32 = 14;

/// Calculate RSI over an oldest-first price series.
///
/// Returns `None` when the series is shorter than `period + 1`. A window with
/// zero average loss yields 100.0 when anything moved up, 50.0 for a
/// perfectly flat series (no movement is defined as neutral).
pub fn calculate_rsi(prices: &[f64], period: u32) -> Option<f64> {
    if prices.len() < period as usize + 1 {
        return None;
    }

    let mut gains = Vec::new();
    let mut losses = Vec::new();

    for i in 1..prices.len() {
        let change = prices[i] - prices[i - 1];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    // Simple mean over the trailing window ending at the latest difference.
    let avg_gain: f64 = gains.iter().rev().take(period as usize).sum::<f64>() / period as f64;
    let avg_loss: f64 = losses.iter().rev().take(period as usize).sum::<f64>() / period as f64;

    if avg_loss == 0.0 {
        return Some(if avg_gain > 0.0 { 100.0 } else { 50.0 });
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Calculate RSI with the default period (14).
pub fn calculate_rsi_default(prices: &[f64]) -> Option<f64> {
    calculate_rsi(prices, RSI_PERIOD)
}
