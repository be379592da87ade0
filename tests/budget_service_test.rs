mod common;

use chrono::{Duration, Utc};
use diesel::prelude::*;
use std::sync::Arc;

use ledgerquest_core::budget::{
    BudgetError, BudgetRepository, BudgetService, BudgetServiceTrait,
};
use ledgerquest_core::db::get_connection;
use ledgerquest_core::schema::budget_policy;
use ledgerquest_core::Error;

fn service(pool: &Arc<ledgerquest_core::db::DbPool>) -> BudgetService {
    BudgetService::new(Arc::new(BudgetRepository::new(pool.clone())))
}

#[test]
fn unset_budget_reports_zero_and_stays_open() {
    let (_dir, pool) = common::setup_db();
    let service = service(&pool);

    let status = service.get_status().unwrap();
    assert_eq!(status.amount, 0);
    assert!(status.can_update);
    assert!(status.updated_at.is_none());
    assert!(status.next_update_date.is_none());
}

#[test]
fn first_set_succeeds_and_arms_the_lock() {
    let (_dir, pool) = common::setup_db();
    let service = service(&pool);

    let status = service.set_limit(30_000).unwrap();
    assert_eq!(status.amount, 30_000);
    assert!(!status.can_update);
    assert!(status.next_update_date.is_some());

    let err = service.set_limit(25_000).unwrap_err();
    match err {
        Error::Budget(BudgetError::UpdateLocked { days_remaining }) => {
            assert!(days_remaining > 0 && days_remaining <= 90);
        }
        other => panic!("expected UpdateLocked, got {:?}", other),
    }

    // The failed attempt must not have changed anything
    assert_eq!(service.get_status().unwrap().amount, 30_000);
}

#[test]
fn lock_expires_after_ninety_days_and_rearms() {
    let (_dir, pool) = common::setup_db();
    let service = service(&pool);

    service.set_limit(30_000).unwrap();

    // Age the policy past the lock window
    let mut conn = get_connection(&pool).unwrap();
    let aged = (Utc::now() - Duration::days(91)).naive_utc();
    diesel::update(budget_policy::table)
        .set(budget_policy::updated_at.eq(aged))
        .execute(&mut conn)
        .unwrap();

    assert!(service.get_status().unwrap().can_update);

    let status = service.set_limit(20_000).unwrap();
    assert_eq!(status.amount, 20_000);
    // A successful mutation re-arms the lock
    assert!(!status.can_update);
}

#[test]
fn rejects_non_positive_amounts() {
    let (_dir, pool) = common::setup_db();
    let service = service(&pool);

    assert!(service.set_limit(0).is_err());
    assert!(service.set_limit(-5).is_err());
}
