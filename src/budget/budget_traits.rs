use crate::budget::budget_model::{BudgetPolicy, BudgetStatus};
use crate::Result;

/// Trait for budget repository operations
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_policy(&self) -> Result<Option<BudgetPolicy>>;
    fn upsert_policy(&self, monthly_limit: i64) -> Result<BudgetPolicy>;
}

/// Trait for budget service operations
pub trait BudgetServiceTrait: Send + Sync {
    fn get_status(&self) -> Result<BudgetStatus>;
    fn set_limit(&self, amount: i64) -> Result<BudgetStatus>;
}
