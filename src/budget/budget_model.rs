use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget policy - the single global monthly spending limit
#[derive(
    Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::budget_policy)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BudgetPolicy {
    pub id: String,
    pub monthly_limit: i64,
    pub updated_at: NaiveDateTime,
}

/// Input for creating/updating the budget policy
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::budget_policy)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetPolicy {
    pub id: Option<String>,
    pub monthly_limit: i64,
    pub updated_at: Option<NaiveDateTime>,
}

/// Budget state for frontend display, including the mutation lock
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub amount: i64,
    pub updated_at: Option<DateTime<Utc>>,
    pub can_update: bool,
    pub next_update_date: Option<DateTime<Utc>>,
}
