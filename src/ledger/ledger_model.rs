use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ledger::ledger_constants::{
    RECORD_DATE_FORMAT, RECORD_KIND_EXPENSE, RECORD_KIND_INCOME,
};
use crate::ledger::ledger_errors::LedgerError;

/// Whether a journal record books money out or in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Expense,
    Income,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Expense => RECORD_KIND_EXPENSE,
            RecordKind::Income => RECORD_KIND_INCOME,
        }
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            s if s == RECORD_KIND_EXPENSE => Ok(RecordKind::Expense),
            s if s == RECORD_KIND_INCOME => Ok(RecordKind::Income),
            _ => Err(format!("Unknown record kind: {}", s)),
        }
    }
}

/// Domain model representing a journal record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRecord {
    pub id: String,
    pub amount: i64,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub kind: RecordKind,
    pub created_at: DateTime<Utc>,
}

/// Database model for journal records
#[derive(Queryable, Selectable, Identifiable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::ledger_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LedgerRecordDB {
    pub id: String,
    pub amount: i64,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub kind: String,
    pub created_at: NaiveDateTime,
}

impl From<LedgerRecordDB> for LedgerRecord {
    fn from(db: LedgerRecordDB) -> Self {
        LedgerRecord {
            id: db.id,
            amount: db.amount,
            category: db.category,
            description: db.description,
            date: db.date,
            // Rows are only ever written through RecordKind::as_str
            kind: RecordKind::from_str(&db.kind).unwrap_or(RecordKind::Expense),
            created_at: DateTime::<Utc>::from_naive_utc_and_offset(db.created_at, Utc),
        }
    }
}

/// Input model for creating a new journal record
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewLedgerRecord {
    pub id: Option<String>,
    pub amount: i64,
    pub category: String,
    pub description: Option<String>,
    pub date: String,
    pub kind: String,
}

impl NewLedgerRecord {
    /// Validates the new journal record data
    pub fn validate(&self) -> crate::ledger::Result<()> {
        if self.amount <= 0 {
            return Err(LedgerError::InvalidData(
                "Amount must be a positive number of currency units".to_string(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(LedgerError::InvalidData(
                "Category cannot be empty".to_string(),
            ));
        }
        if RecordKind::from_str(&self.kind).is_err() {
            return Err(LedgerError::InvalidData(format!(
                "Record kind must be '{}' or '{}'",
                RECORD_KIND_EXPENSE, RECORD_KIND_INCOME
            )));
        }
        if NaiveDate::parse_from_str(&self.date, RECORD_DATE_FORMAT).is_err() {
            return Err(LedgerError::InvalidData(
                "Invalid date format. Expected YYYY-MM-DD".to_string(),
            ));
        }
        Ok(())
    }
}

/// One row of the three-year profit overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualSummary {
    pub year: i32,
    pub total_income: i64,
    pub total_expense: i64,
    pub net_profit: i64,
    pub growth_pct: Option<f64>,
}
