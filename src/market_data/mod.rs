pub(crate) mod market_data_errors;
pub(crate) mod market_data_provider;
pub(crate) mod providers;

// Re-export the public interface
pub use market_data_errors::MarketDataError;
pub use market_data_provider::MarketDataProvider;
pub use providers::yahoo_provider::{normalize_symbol, YahooProvider};
