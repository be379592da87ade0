use async_trait::async_trait;

use crate::ledger::LedgerRecordDB;
use crate::portfolio::liquidation::LotDraw;
use crate::portfolio::portfolio_model::{
    LotValuation, NewPositionLot, PositionLot, SaleOutcome,
};
use crate::Result;

/// Trait defining the contract for position-ledger repository operations
pub trait PortfolioRepositoryTrait: Send + Sync {
    fn get_lots(&self) -> Result<Vec<PositionLot>>;
    fn get_lot(&self, lot_id: &str) -> Result<PositionLot>;
    fn get_lots_by_symbol(&self, symbol: &str) -> Result<Vec<PositionLot>>;
    fn insert_lot(&self, new_lot: NewPositionLot) -> Result<PositionLot>;
    /// Applies lot decrements/deletions and the realized-P&L journal record
    /// as one atomic unit.
    fn apply_sale(&self, draws: &[LotDraw], journal: LedgerRecordDB) -> Result<()>;
}

/// Trait defining the contract for position-ledger service operations
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    fn buy(&self, new_lot: NewPositionLot) -> Result<PositionLot>;
    fn sell_lot(&self, lot_id: &str, shares: i64, price: f64) -> Result<SaleOutcome>;
    fn sell_smart(&self, symbol: &str, shares: i64, price: f64) -> Result<SaleOutcome>;
    async fn list_holdings(&self) -> Result<Vec<LotValuation>>;
}
