use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::portfolio::portfolio_errors::PortfolioError;

/// Domain model for one discrete purchase batch of a symbol.
///
/// Lots never merge: every buy keeps its own cost basis so a later
/// sale can liquidate the cheapest inventory first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionLot {
    pub id: String,
    pub symbol: String,
    pub shares: i64,
    pub average_cost: f64,
    pub created_at: DateTime<Utc>,
}

/// Database model for position lots
#[derive(Queryable, Selectable, Identifiable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::position_lots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PositionLotDB {
    pub id: String,
    pub symbol: String,
    pub shares: i64,
    pub average_cost: f64,
    pub created_at: NaiveDateTime,
}

impl From<PositionLotDB> for PositionLot {
    fn from(db: PositionLotDB) -> Self {
        PositionLot {
            id: db.id,
            symbol: db.symbol,
            shares: db.shares,
            average_cost: db.average_cost,
            created_at: DateTime::<Utc>::from_naive_utc_and_offset(db.created_at, Utc),
        }
    }
}

/// Input model for buying stock
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewPositionLot {
    pub id: Option<String>,
    pub symbol: String,
    pub shares: i64,
    pub price: f64,
}

impl NewPositionLot {
    pub fn validate(&self) -> crate::portfolio::Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(PortfolioError::InvalidData(
                "Symbol cannot be empty".to_string(),
            ));
        }
        if self.shares <= 0 {
            return Err(PortfolioError::InvalidData(
                "Shares must be a positive number".to_string(),
            ));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(PortfolioError::InvalidData(
                "Price must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of a completed sale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleOutcome {
    pub symbol: String,
    pub sold_shares: i64,
    pub realized_profit: f64,
}

/// Read-time valuation of one lot; never persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LotValuation {
    pub id: String,
    pub symbol: String,
    pub shares: i64,
    pub average_cost: f64,
    pub current_price: f64,
    pub market_value: f64,
    pub profit: f64,
}
