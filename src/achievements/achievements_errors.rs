use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for achievement-engine operations
#[derive(Debug, Error)]
pub enum AchievementError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for AchievementError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => AchievementError::NotFound("Achievement not found".to_string()),
            _ => AchievementError::DatabaseError(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AchievementError>;
