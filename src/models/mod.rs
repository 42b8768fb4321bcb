//! Shared data models spanning the monitor layers.

pub mod price;

pub use price::{PriceSample, RunSummary, TTL_SECONDS};
