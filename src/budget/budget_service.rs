use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use crate::budget::budget_errors::BudgetError;
use crate::budget::budget_model::{BudgetPolicy, BudgetStatus};
use crate::budget::budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::constants::BUDGET_LOCK_DAYS;
use crate::Result;

/// Service for reading and mutating the singleton budget policy
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        BudgetService { repository }
    }

    fn status_from_policy(policy: &BudgetPolicy) -> BudgetStatus {
        let updated_at = DateTime::<Utc>::from_naive_utc_and_offset(policy.updated_at, Utc);
        let elapsed = Utc::now().signed_duration_since(updated_at);
        let is_locked = elapsed < Duration::days(BUDGET_LOCK_DAYS);

        BudgetStatus {
            amount: policy.monthly_limit,
            updated_at: Some(updated_at),
            can_update: !is_locked,
            next_update_date: if is_locked {
                Some(updated_at + Duration::days(BUDGET_LOCK_DAYS))
            } else {
                None
            },
        }
    }
}

impl BudgetServiceTrait for BudgetService {
    fn get_status(&self) -> Result<BudgetStatus> {
        match self.repository.get_policy()? {
            Some(policy) => Ok(Self::status_from_policy(&policy)),
            // Nothing configured yet: report zero and leave the first set open
            None => Ok(BudgetStatus {
                amount: 0,
                updated_at: None,
                can_update: true,
                next_update_date: None,
            }),
        }
    }

    fn set_limit(&self, amount: i64) -> Result<BudgetStatus> {
        if amount <= 0 {
            return Err(BudgetError::InvalidData(
                "Monthly limit must be a positive number of currency units".to_string(),
            )
            .into());
        }

        if let Some(policy) = self.repository.get_policy()? {
            let updated_at = DateTime::<Utc>::from_naive_utc_and_offset(policy.updated_at, Utc);
            let elapsed = Utc::now().signed_duration_since(updated_at);
            if elapsed < Duration::days(BUDGET_LOCK_DAYS) {
                return Err(BudgetError::UpdateLocked {
                    days_remaining: BUDGET_LOCK_DAYS - elapsed.num_days(),
                }
                .into());
            }
        }

        let policy = self.repository.upsert_policy(amount)?;
        Ok(Self::status_from_policy(&policy))
    }
}
