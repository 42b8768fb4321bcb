//! External market data services.

pub mod market_data;
pub mod okx;

pub use market_data::MarketDataSource;
pub use okx::OkxClient;
