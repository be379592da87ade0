use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for budget-policy operations
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Budget is locked for another {days_remaining} days")]
    UpdateLocked { days_remaining: i64 },
}

impl From<DieselError> for BudgetError {
    fn from(err: DieselError) -> Self {
        BudgetError::DatabaseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BudgetError>;
