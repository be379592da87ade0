use crate::ledger::ledger_model::{AnnualSummary, LedgerRecord, NewLedgerRecord};
use crate::Result;

/// Trait defining the contract for ledger repository operations
pub trait LedgerRepositoryTrait: Send + Sync {
    fn get_records(&self) -> Result<Vec<LedgerRecord>>;
    fn get_expense_records(&self) -> Result<Vec<LedgerRecord>>;
    fn list_records(&self, offset: i64, limit: i64) -> Result<Vec<LedgerRecord>>;
    fn get_record(&self, record_id: &str) -> Result<LedgerRecord>;
    fn create_record(&self, new_record: NewLedgerRecord) -> Result<LedgerRecord>;
    fn delete_record(&self, record_id: &str) -> Result<LedgerRecord>;
    fn record_count(&self) -> Result<i64>;
}

/// Trait defining the contract for ledger service operations
pub trait LedgerServiceTrait: Send + Sync {
    fn add_record(&self, new_record: NewLedgerRecord) -> Result<LedgerRecord>;
    fn list_records(&self, offset: i64, limit: i64) -> Result<Vec<LedgerRecord>>;
    fn delete_record(&self, record_id: &str) -> Result<LedgerRecord>;
    fn record_count(&self) -> Result<i64>;
    fn get_annual_summary(&self) -> Result<Vec<AnnualSummary>>;
}
