use chrono::{Datelike, NaiveDate, Utc};
use std::sync::Arc;
use tempfile::TempDir;

use ledgerquest_core::db::{self, DbPool};

/// Builds a throwaway SQLite database for one test
pub fn setup_db() -> (TempDir, Arc<DbPool>) {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let db_path = db::init(dir.path().to_str().unwrap()).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    (dir, pool)
}

/// First day of the calendar month `n` months before the current one
#[allow(dead_code)]
pub fn months_back(n: i32) -> NaiveDate {
    let today = Utc::now().date_naive();
    let mut year = today.year();
    let mut month = today.month() as i32 - n;
    while month <= 0 {
        month += 12;
        year -= 1;
    }
    NaiveDate::from_ymd_opt(year, month as u32, 1).unwrap()
}
