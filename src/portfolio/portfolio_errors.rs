use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for position-ledger operations
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Insufficient inventory: requested {requested} shares, holding {available}")]
    InsufficientInventory { requested: i64, available: i64 },
}

impl From<DieselError> for PortfolioError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => PortfolioError::NotFound("Lot not found".to_string()),
            _ => PortfolioError::DatabaseError(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
