use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::ledger::ledger_constants::{RECORD_DATE_FORMAT, RECORD_KIND_EXPENSE};
use crate::ledger::ledger_errors::LedgerError;
use crate::ledger::ledger_model::{LedgerRecord, LedgerRecordDB, NewLedgerRecord};
use crate::ledger::ledger_traits::LedgerRepositoryTrait;
use crate::schema::ledger_records;
use crate::Result;

/// Repository for managing journal records in the database
pub struct LedgerRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl LedgerRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl LedgerRepositoryTrait for LedgerRepository {
    /// Retrieves every journal record, oldest first
    fn get_records(&self) -> Result<Vec<LedgerRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let records = ledger_records::table
            .select(LedgerRecordDB::as_select())
            .order((ledger_records::date.asc(), ledger_records::created_at.asc()))
            .load::<LedgerRecordDB>(&mut conn)
            .map_err(LedgerError::from)?;

        Ok(records.into_iter().map(LedgerRecord::from).collect())
    }

    /// Retrieves expense-kind records only, oldest first
    fn get_expense_records(&self) -> Result<Vec<LedgerRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let records = ledger_records::table
            .filter(ledger_records::kind.eq(RECORD_KIND_EXPENSE))
            .select(LedgerRecordDB::as_select())
            .order((ledger_records::date.asc(), ledger_records::created_at.asc()))
            .load::<LedgerRecordDB>(&mut conn)
            .map_err(LedgerError::from)?;

        Ok(records.into_iter().map(LedgerRecord::from).collect())
    }

    fn list_records(&self, offset: i64, limit: i64) -> Result<Vec<LedgerRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let records = ledger_records::table
            .select(LedgerRecordDB::as_select())
            .order((
                ledger_records::date.desc(),
                ledger_records::created_at.desc(),
            ))
            .offset(offset)
            .limit(limit)
            .load::<LedgerRecordDB>(&mut conn)
            .map_err(LedgerError::from)?;

        Ok(records.into_iter().map(LedgerRecord::from).collect())
    }

    fn get_record(&self, record_id: &str) -> Result<LedgerRecord> {
        let mut conn = get_connection(&self.pool)?;

        let record = ledger_records::table
            .find(record_id)
            .select(LedgerRecordDB::as_select())
            .first::<LedgerRecordDB>(&mut conn)
            .map_err(LedgerError::from)?;

        Ok(record.into())
    }

    fn create_record(&self, new_record: NewLedgerRecord) -> Result<LedgerRecord> {
        let mut conn = get_connection(&self.pool)?;

        new_record.validate()?;

        let date = NaiveDate::parse_from_str(&new_record.date, RECORD_DATE_FORMAT)
            .map_err(|e| LedgerError::InvalidData(e.to_string()))?;

        let record_db = LedgerRecordDB {
            id: new_record
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            amount: new_record.amount,
            category: new_record.category,
            description: new_record.description,
            date,
            kind: new_record.kind,
            created_at: chrono::Utc::now().naive_utc(),
        };

        let inserted = diesel::insert_into(ledger_records::table)
            .values(&record_db)
            .get_result::<LedgerRecordDB>(&mut conn)
            .map_err(LedgerError::from)?;

        Ok(inserted.into())
    }

    /// Deletes a record by ID and returns the deleted row
    fn delete_record(&self, record_id: &str) -> Result<LedgerRecord> {
        let mut conn = get_connection(&self.pool)?;

        let record = ledger_records::table
            .find(record_id)
            .select(LedgerRecordDB::as_select())
            .first::<LedgerRecordDB>(&mut conn)
            .map_err(LedgerError::from)?;

        diesel::delete(ledger_records::table.filter(ledger_records::id.eq(record_id)))
            .execute(&mut conn)
            .map_err(LedgerError::from)?;

        Ok(record.into())
    }

    fn record_count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;

        let count = ledger_records::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(LedgerError::from)?;

        Ok(count)
    }
}
