use async_trait::async_trait;
use log::debug;
use yahoo_finance_api as yahoo;

use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_provider::MarketDataProvider;

pub struct YahooProvider {
    provider: yahoo::YahooConnector,
}

impl YahooProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        let provider = yahoo::YahooConnector::new()?;
        Ok(YahooProvider { provider })
    }
}

/// Bare numeric tickers are Taiwan exchange listings on Yahoo
pub fn normalize_symbol(symbol: &str) -> String {
    if !symbol.is_empty() && symbol.chars().all(|c| c.is_ascii_digit()) {
        format!("{}.TW", symbol)
    } else {
        symbol.to_string()
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn get_latest_price(&self, symbol: &str) -> Result<f64, MarketDataError> {
        let ticker = normalize_symbol(symbol);
        debug!("Fetching latest quote for {}", ticker);

        let response = self.provider.get_latest_quotes(&ticker, "1d").await?;
        let quote = response.last_quote()?;

        Ok(quote.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_symbols_get_the_tw_suffix() {
        assert_eq!(normalize_symbol("2330"), "2330.TW");
        assert_eq!(normalize_symbol("0050"), "0050.TW");
    }

    #[test]
    fn alphabetic_and_mixed_symbols_pass_through() {
        assert_eq!(normalize_symbol("AAPL"), "AAPL");
        assert_eq!(normalize_symbol("BRK.B"), "BRK.B");
        assert_eq!(normalize_symbol(""), "");
    }
}
