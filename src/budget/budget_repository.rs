use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::budget::budget_errors::BudgetError;
use crate::budget::budget_model::{BudgetPolicy, NewBudgetPolicy};
use crate::budget::budget_traits::BudgetRepositoryTrait;
use crate::db::get_connection;
use crate::schema::budget_policy;
use crate::Result;

pub struct BudgetRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl BudgetRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        BudgetRepository { pool }
    }
}

impl BudgetRepositoryTrait for BudgetRepository {
    fn get_policy(&self) -> Result<Option<BudgetPolicy>> {
        let mut conn = get_connection(&self.pool)?;
        let result = budget_policy::table
            .first::<BudgetPolicy>(&mut conn)
            .optional()
            .map_err(BudgetError::from)?;
        Ok(result)
    }

    fn upsert_policy(&self, monthly_limit: i64) -> Result<BudgetPolicy> {
        let mut conn = get_connection(&self.pool)?;
        let now = Utc::now().naive_utc();

        let existing: Option<BudgetPolicy> = budget_policy::table
            .first::<BudgetPolicy>(&mut conn)
            .optional()
            .map_err(BudgetError::from)?;

        if let Some(existing_policy) = existing {
            diesel::update(budget_policy::table.find(&existing_policy.id))
                .set((
                    budget_policy::monthly_limit.eq(monthly_limit),
                    budget_policy::updated_at.eq(now),
                ))
                .execute(&mut conn)
                .map_err(BudgetError::from)?;

            Ok(budget_policy::table
                .find(&existing_policy.id)
                .first::<BudgetPolicy>(&mut conn)
                .map_err(BudgetError::from)?)
        } else {
            let new_policy = NewBudgetPolicy {
                id: Some(Uuid::new_v4().to_string()),
                monthly_limit,
                updated_at: Some(now),
            };

            diesel::insert_into(budget_policy::table)
                .values(&new_policy)
                .execute(&mut conn)
                .map_err(BudgetError::from)?;

            Ok(budget_policy::table
                .find(new_policy.id.unwrap())
                .first::<BudgetPolicy>(&mut conn)
                .map_err(BudgetError::from)?)
        }
    }
}
