use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Domain model for one achievement's persisted unlock state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementState {
    pub code: String,
    pub is_unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Database model for achievement unlock state
#[derive(Queryable, Selectable, Identifiable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::achievements)]
#[diesel(primary_key(code))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AchievementStateDB {
    pub code: String,
    pub is_unlocked: bool,
    pub unlocked_at: Option<NaiveDateTime>,
}

impl From<AchievementStateDB> for AchievementState {
    fn from(db: AchievementStateDB) -> Self {
        AchievementState {
            code: db.code,
            is_unlocked: db.is_unlocked,
            unlocked_at: db
                .unlocked_at
                .map(|ts| DateTime::<Utc>::from_naive_utc_and_offset(ts, Utc)),
        }
    }
}

/// Catalog definition joined with unlock state, for frontend display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDetails {
    pub code: String,
    pub name: String,
    pub description: String,
    pub tier: i32,
    pub icon: String,
    pub is_unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
}
