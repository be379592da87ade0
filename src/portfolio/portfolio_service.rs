use async_trait::async_trait;
use chrono::Utc;
use log::warn;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::constants::{INVESTMENT_GAIN_CATEGORY, INVESTMENT_LOSS_CATEGORY};
use crate::ledger::{LedgerRecordDB, RecordKind};
use crate::market_data::MarketDataProvider;
use crate::portfolio::liquidation::{plan_liquidation, LotDraw};
use crate::portfolio::portfolio_errors::PortfolioError;
use crate::portfolio::portfolio_model::{
    LotValuation, NewPositionLot, PositionLot, SaleOutcome,
};
use crate::portfolio::portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::Result;

/// Service for the lot-based position ledger
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepositoryTrait>,
    quote_provider: Arc<dyn MarketDataProvider>,
}

impl PortfolioService {
    pub fn new(
        repository: Arc<dyn PortfolioRepositoryTrait>,
        quote_provider: Arc<dyn MarketDataProvider>,
    ) -> Self {
        Self {
            repository,
            quote_provider,
        }
    }

    /// Builds the journal row booking a sale's realized profit or loss
    fn trade_journal_record(symbol: &str, sold_shares: i64, realized: f64) -> LedgerRecordDB {
        let (kind, category) = if realized > 0.0 {
            (RecordKind::Income, INVESTMENT_GAIN_CATEGORY)
        } else {
            (RecordKind::Expense, INVESTMENT_LOSS_CATEGORY)
        };

        let now = Utc::now();
        LedgerRecordDB {
            id: Uuid::new_v4().to_string(),
            amount: realized.abs().round() as i64,
            category: category.to_string(),
            description: Some(format!("Sold {} share(s) of {}", sold_shares, symbol)),
            date: now.date_naive(),
            kind: kind.as_str().to_string(),
            created_at: now.naive_utc(),
        }
    }

    fn validate_sale_request(shares: i64, price: f64) -> Result<()> {
        if shares <= 0 {
            return Err(PortfolioError::InvalidData(
                "Shares must be a positive number".to_string(),
            )
            .into());
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(PortfolioError::InvalidData(
                "Price must be a positive number".to_string(),
            )
            .into());
        }
        Ok(())
    }

    fn round_price(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    fn value_lot(lot: &PositionLot, current_price: f64) -> LotValuation {
        let market_value = current_price * lot.shares as f64;
        let total_cost = lot.average_cost * lot.shares as f64;

        LotValuation {
            id: lot.id.clone(),
            symbol: lot.symbol.clone(),
            shares: lot.shares,
            average_cost: lot.average_cost,
            current_price: Self::round_price(current_price),
            market_value: market_value.round(),
            profit: (market_value - total_cost).round(),
        }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    fn buy(&self, new_lot: NewPositionLot) -> Result<PositionLot> {
        new_lot.validate()?;
        self.repository.insert_lot(new_lot)
    }

    fn sell_lot(&self, lot_id: &str, shares: i64, price: f64) -> Result<SaleOutcome> {
        Self::validate_sale_request(shares, price)?;

        let lot = self.repository.get_lot(lot_id)?;
        if shares > lot.shares {
            return Err(PortfolioError::InsufficientInventory {
                requested: shares,
                available: lot.shares,
            }
            .into());
        }

        let realized = (price - lot.average_cost) * shares as f64;
        let draw = LotDraw {
            lot_id: lot.id.clone(),
            shares,
            drained: shares == lot.shares,
        };

        let journal = Self::trade_journal_record(&lot.symbol, shares, realized);
        self.repository.apply_sale(&[draw], journal)?;

        Ok(SaleOutcome {
            symbol: lot.symbol,
            sold_shares: shares,
            realized_profit: realized,
        })
    }

    fn sell_smart(&self, symbol: &str, shares: i64, price: f64) -> Result<SaleOutcome> {
        Self::validate_sale_request(shares, price)?;

        let lots = self.repository.get_lots_by_symbol(symbol)?;
        let available: i64 = lots.iter().map(|lot| lot.shares).sum();
        if available < shares {
            return Err(PortfolioError::InsufficientInventory {
                requested: shares,
                available,
            }
            .into());
        }

        let plan = plan_liquidation(&lots, shares, price);

        // One aggregated journal record for the whole sale
        let journal = Self::trade_journal_record(symbol, plan.sold_shares, plan.realized_profit);
        self.repository.apply_sale(&plan.draws, journal)?;

        Ok(SaleOutcome {
            symbol: symbol.to_string(),
            sold_shares: plan.sold_shares,
            realized_profit: plan.realized_profit,
        })
    }

    async fn list_holdings(&self) -> Result<Vec<LotValuation>> {
        let lots = self.repository.get_lots()?;
        if lots.is_empty() {
            return Ok(Vec::new());
        }

        // One provider call per distinct symbol; a failed lookup degrades
        // each of that symbol's lots to its own cost basis.
        let mut fetched: HashMap<String, Option<f64>> = HashMap::new();
        let mut valuations = Vec::with_capacity(lots.len());

        for lot in &lots {
            let quote = match fetched.get(&lot.symbol).copied() {
                Some(cached) => cached,
                None => {
                    let result = match self.quote_provider.get_latest_price(&lot.symbol).await {
                        Ok(price) => Some(price),
                        Err(e) => {
                            warn!(
                                "Quote lookup failed for {}, falling back to cost basis: {}",
                                lot.symbol, e
                            );
                            None
                        }
                    };
                    fetched.insert(lot.symbol.clone(), result);
                    result
                }
            };

            let current_price = quote.unwrap_or(lot.average_cost);
            valuations.push(Self::value_lot(lot, current_price));
        }

        Ok(valuations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn lot(cost: f64, shares: i64) -> PositionLot {
        PositionLot {
            id: "lot-1".to_string(),
            symbol: "AAPL".to_string(),
            shares,
            average_cost: cost,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn valuation_rounds_for_display() {
        let valuation = PortfolioService::value_lot(&lot(10.0, 3), 12.3456);

        assert_eq!(valuation.current_price, 12.35);
        assert_eq!(valuation.market_value, 37.0);
        assert_eq!(valuation.profit, 7.0);
    }

    #[test]
    fn gain_books_income_and_loss_books_expense() {
        let gain = PortfolioService::trade_journal_record("AAPL", 2, 150.4);
        assert_eq!(gain.kind, RecordKind::Income.as_str());
        assert_eq!(gain.category, INVESTMENT_GAIN_CATEGORY);
        assert_eq!(gain.amount, 150);

        let loss = PortfolioService::trade_journal_record("AAPL", 2, -80.6);
        assert_eq!(loss.kind, RecordKind::Expense.as_str());
        assert_eq!(loss.category, INVESTMENT_LOSS_CATEGORY);
        assert_eq!(loss.amount, 81);
    }

    #[test]
    fn break_even_sale_books_a_zero_loss() {
        let journal = PortfolioService::trade_journal_record("AAPL", 1, 0.0);
        assert_eq!(journal.kind, RecordKind::Expense.as_str());
        assert_eq!(journal.amount, 0);
    }
}
