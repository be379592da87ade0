use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for ledger-related operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Record is {age_hours} hours old and can no longer be deleted (limit {window_hours} hours)")]
    DeletionLocked { age_hours: i64, window_hours: i64 },
}

impl From<DieselError> for LedgerError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => LedgerError::NotFound("Record not found".to_string()),
            _ => LedgerError::DatabaseError(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
