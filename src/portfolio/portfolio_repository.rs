use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::ledger::LedgerRecordDB;
use crate::portfolio::liquidation::LotDraw;
use crate::portfolio::portfolio_errors::PortfolioError;
use crate::portfolio::portfolio_model::{NewPositionLot, PositionLot, PositionLotDB};
use crate::portfolio::portfolio_traits::PortfolioRepositoryTrait;
use crate::schema::{ledger_records, position_lots};
use crate::Result;

/// Repository for managing position lots in the database
pub struct PortfolioRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl PortfolioRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl PortfolioRepositoryTrait for PortfolioRepository {
    fn get_lots(&self) -> Result<Vec<PositionLot>> {
        let mut conn = get_connection(&self.pool)?;

        let lots = position_lots::table
            .select(PositionLotDB::as_select())
            .order((position_lots::symbol.asc(), position_lots::created_at.asc()))
            .load::<PositionLotDB>(&mut conn)
            .map_err(PortfolioError::from)?;

        Ok(lots.into_iter().map(PositionLot::from).collect())
    }

    fn get_lot(&self, lot_id: &str) -> Result<PositionLot> {
        let mut conn = get_connection(&self.pool)?;

        let lot = position_lots::table
            .find(lot_id)
            .select(PositionLotDB::as_select())
            .first::<PositionLotDB>(&mut conn)
            .map_err(PortfolioError::from)?;

        Ok(lot.into())
    }

    /// Retrieves a symbol's lots cheapest cost basis first
    fn get_lots_by_symbol(&self, symbol: &str) -> Result<Vec<PositionLot>> {
        let mut conn = get_connection(&self.pool)?;

        let lots = position_lots::table
            .filter(position_lots::symbol.eq(symbol))
            .select(PositionLotDB::as_select())
            .order((
                position_lots::average_cost.asc(),
                position_lots::created_at.asc(),
            ))
            .load::<PositionLotDB>(&mut conn)
            .map_err(PortfolioError::from)?;

        Ok(lots.into_iter().map(PositionLot::from).collect())
    }

    fn insert_lot(&self, new_lot: NewPositionLot) -> Result<PositionLot> {
        let mut conn = get_connection(&self.pool)?;

        new_lot.validate()?;

        let lot_db = PositionLotDB {
            id: new_lot.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            symbol: new_lot.symbol,
            shares: new_lot.shares,
            average_cost: new_lot.price,
            created_at: Utc::now().naive_utc(),
        };

        let inserted = diesel::insert_into(position_lots::table)
            .values(&lot_db)
            .get_result::<PositionLotDB>(&mut conn)
            .map_err(PortfolioError::from)?;

        Ok(inserted.into())
    }

    fn apply_sale(&self, draws: &[LotDraw], journal: LedgerRecordDB) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        conn.transaction::<_, PortfolioError, _>(|conn| {
            for draw in draws {
                if draw.drained {
                    // A lot with zero shares is deleted, never persisted
                    diesel::delete(position_lots::table.find(&draw.lot_id)).execute(conn)?;
                } else {
                    diesel::update(position_lots::table.find(&draw.lot_id))
                        .set(position_lots::shares.eq(position_lots::shares - draw.shares))
                        .execute(conn)?;
                }
            }

            diesel::insert_into(ledger_records::table)
                .values(&journal)
                .execute(conn)?;

            Ok(())
        })?;

        Ok(())
    }
}
