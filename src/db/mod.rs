//! Persistent price history storage.

pub mod history;

pub use history::{HistoryStore, PriceHistoryStore};
