use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::collections::HashSet;
use std::sync::Arc;

use crate::achievements::achievements_errors::AchievementError;
use crate::achievements::achievements_model::{AchievementState, AchievementStateDB};
use crate::achievements::achievements_traits::AchievementRepositoryTrait;
use crate::db::get_connection;
use crate::schema::achievements;
use crate::Result;

/// Repository for achievement unlock state
pub struct AchievementRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl AchievementRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl AchievementRepositoryTrait for AchievementRepository {
    fn ensure_seeded(&self, codes: &[&str]) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let existing: HashSet<String> = achievements::table
            .select(achievements::code)
            .load::<String>(&mut conn)
            .map_err(AchievementError::from)?
            .into_iter()
            .collect();

        for code in codes {
            if existing.contains(*code) {
                continue;
            }
            let row = AchievementStateDB {
                code: code.to_string(),
                is_unlocked: false,
                unlocked_at: None,
            };
            diesel::insert_into(achievements::table)
                .values(&row)
                .on_conflict(achievements::code)
                .do_nothing()
                .execute(&mut conn)
                .map_err(AchievementError::from)?;
        }

        Ok(())
    }

    fn get_states(&self) -> Result<Vec<AchievementState>> {
        let mut conn = get_connection(&self.pool)?;

        let states = achievements::table
            .select(AchievementStateDB::as_select())
            .load::<AchievementStateDB>(&mut conn)
            .map_err(AchievementError::from)?;

        Ok(states.into_iter().map(AchievementState::from).collect())
    }

    fn mark_unlocked(&self, codes: &[&str]) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let now = Utc::now().naive_utc();

        conn.transaction::<_, AchievementError, _>(|conn| {
            for code in codes {
                // Unlocking is monotonic: rows already unlocked keep their
                // original timestamp
                diesel::update(
                    achievements::table
                        .filter(achievements::code.eq(*code))
                        .filter(achievements::is_unlocked.eq(false)),
                )
                .set((
                    achievements::is_unlocked.eq(true),
                    achievements::unlocked_at.eq(now),
                ))
                .execute(conn)?;
            }
            Ok(())
        })?;

        Ok(())
    }

    fn delete_all(&self) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let deleted = diesel::delete(achievements::table)
            .execute(&mut conn)
            .map_err(AchievementError::from)?;

        Ok(deleted)
    }
}
