mod common;

use chrono::{Duration, Utc};
use diesel::prelude::*;
use std::sync::Arc;

use ledgerquest_core::db::get_connection;
use ledgerquest_core::ledger::{
    LedgerError, LedgerRepository, LedgerService, LedgerServiceTrait, NewLedgerRecord,
};
use ledgerquest_core::schema::ledger_records;
use ledgerquest_core::Error;

fn new_record(amount: i64, date: &str, kind: &str) -> NewLedgerRecord {
    NewLedgerRecord {
        id: None,
        amount,
        category: "groceries".to_string(),
        description: Some("weekly shop".to_string()),
        date: date.to_string(),
        kind: kind.to_string(),
    }
}

fn service(pool: &Arc<ledgerquest_core::db::DbPool>) -> LedgerService {
    LedgerService::new(Arc::new(LedgerRepository::new(pool.clone())))
}

#[test]
fn adds_and_lists_records() {
    let (_dir, pool) = common::setup_db();
    let service = service(&pool);

    let created = service
        .add_record(new_record(120, "2025-03-01", "expense"))
        .unwrap();
    assert_eq!(created.amount, 120);

    service
        .add_record(new_record(500, "2025-03-05", "income"))
        .unwrap();

    let page = service.list_records(0, 10).unwrap();
    assert_eq!(page.len(), 2);
    // Newest date first
    assert_eq!(page[0].amount, 500);

    assert_eq!(service.record_count().unwrap(), 2);

    let short_page = service.list_records(1, 10).unwrap();
    assert_eq!(short_page.len(), 1);
}

#[test]
fn rejects_invalid_input() {
    let (_dir, pool) = common::setup_db();
    let service = service(&pool);

    assert!(service.add_record(new_record(0, "2025-03-01", "expense")).is_err());
    assert!(service.add_record(new_record(10, "03/01/2025", "expense")).is_err());
    assert!(service.add_record(new_record(10, "2025-03-01", "transfer")).is_err());
}

#[test]
fn deletes_a_fresh_record() {
    let (_dir, pool) = common::setup_db();
    let service = service(&pool);

    let created = service
        .add_record(new_record(42, "2025-03-01", "expense"))
        .unwrap();

    let deleted = service.delete_record(&created.id).unwrap();
    assert_eq!(deleted.id, created.id);
    assert_eq!(service.record_count().unwrap(), 0);
}

#[test]
fn delete_is_locked_after_twelve_hours() {
    let (_dir, pool) = common::setup_db();
    let service = service(&pool);

    let created = service
        .add_record(new_record(42, "2025-03-01", "expense"))
        .unwrap();

    // Backdate creation to 13 hours ago
    let mut conn = get_connection(&pool).unwrap();
    let backdated = (Utc::now() - Duration::hours(13)).naive_utc();
    diesel::update(ledger_records::table.find(&created.id))
        .set(ledger_records::created_at.eq(backdated))
        .execute(&mut conn)
        .unwrap();

    let err = service.delete_record(&created.id).unwrap_err();
    assert!(matches!(
        err,
        Error::Ledger(LedgerError::DeletionLocked { .. })
    ));
    assert_eq!(service.record_count().unwrap(), 1);
}

#[test]
fn delete_still_works_at_eleven_hours() {
    let (_dir, pool) = common::setup_db();
    let service = service(&pool);

    let created = service
        .add_record(new_record(42, "2025-03-01", "expense"))
        .unwrap();

    let mut conn = get_connection(&pool).unwrap();
    let backdated = (Utc::now() - Duration::hours(11)).naive_utc();
    diesel::update(ledger_records::table.find(&created.id))
        .set(ledger_records::created_at.eq(backdated))
        .execute(&mut conn)
        .unwrap();

    assert!(service.delete_record(&created.id).is_ok());
}

#[test]
fn delete_of_a_missing_record_is_not_found() {
    let (_dir, pool) = common::setup_db();
    let service = service(&pool);

    let err = service.delete_record("no-such-id").unwrap_err();
    assert!(matches!(err, Error::Ledger(LedgerError::NotFound(_))));
}

#[test]
fn annual_summary_covers_recent_years_newest_first() {
    let (_dir, pool) = common::setup_db();
    let service = service(&pool);

    let this_year = Utc::now().date_naive().format("%Y").to_string();
    let last_year = format!("{}", this_year.parse::<i32>().unwrap() - 1);

    service
        .add_record(new_record(300, &format!("{}-02-01", last_year), "income"))
        .unwrap();
    service
        .add_record(new_record(200, &format!("{}-03-01", last_year), "expense"))
        .unwrap();
    service
        .add_record(new_record(400, &format!("{}-01-15", this_year), "income"))
        .unwrap();
    service
        .add_record(new_record(250, &format!("{}-01-20", this_year), "expense"))
        .unwrap();

    let summaries = service.get_annual_summary().unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].year.to_string(), this_year);
    assert_eq!(summaries[0].net_profit, 150);
    assert_eq!(summaries[0].growth_pct, Some(50.0));
    assert_eq!(summaries[1].net_profit, 100);
    assert_eq!(summaries[1].growth_pct, None);
}
