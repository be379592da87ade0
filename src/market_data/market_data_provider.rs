use async_trait::async_trait;

use super::MarketDataError;

/// Capability boundary for the external price-quote source.
///
/// Implementations must be best-effort: callers treat every error as
/// "no quote available" and degrade to the lot's own cost basis.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn get_latest_price(&self, symbol: &str) -> Result<f64, MarketDataError>;
}
