use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::constants::MONTH_KEY_FORMAT;
use crate::ledger::{LedgerRecord, RecordKind};

/// Cumulative savings and streak statistics over the settled history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavingsStats {
    pub total_savings: i64,
    pub max_success_streak: u32,
    pub max_fail_streak: u32,
    pub has_succeeded_once: bool,
    pub has_failed_once: bool,
    pub has_super_save: bool,
}

/// Groups expense records into per-month totals, excluding the in-progress
/// calendar month, sorted ascending by month key ("%Y-%m").
///
/// The in-progress month is never settled: counting it would let unlocks
/// fire mid-month and flap before the month closes.
pub fn aggregate_settled_months(
    records: &[LedgerRecord],
    today: NaiveDate,
) -> Vec<(String, i64)> {
    let current_month = today.format(MONTH_KEY_FORMAT).to_string();

    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    for record in records {
        if record.kind != RecordKind::Expense {
            continue;
        }
        let month = record.date.format(MONTH_KEY_FORMAT).to_string();
        if month == current_month {
            continue;
        }
        *totals.entry(month).or_insert(0) += record.amount;
    }

    totals.into_iter().collect()
}

/// Walks settled months chronologically, deriving cumulative savings and
/// success/failure streaks against the monthly limit.
///
/// `total_savings` accumulates positive months only; an over-budget month
/// breaks the streak but never reduces the total.
pub fn evaluate_history(months: &[(String, i64)], monthly_limit: i64) -> SavingsStats {
    let mut stats = SavingsStats::default();
    let mut success_streak: u32 = 0;
    let mut fail_streak: u32 = 0;

    for (_, spent) in months {
        let savings = monthly_limit - spent;

        if savings > 0 {
            stats.total_savings += savings;
            stats.has_succeeded_once = true;
            success_streak += 1;
            fail_streak = 0;

            if savings > *spent {
                stats.has_super_save = true;
            }
        } else {
            stats.has_failed_once = true;
            fail_streak += 1;
            success_streak = 0;
        }

        stats.max_success_streak = stats.max_success_streak.max(success_streak);
        stats.max_fail_streak = stats.max_fail_streak.max(fail_streak);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn expense(date: &str, amount: i64) -> LedgerRecord {
        LedgerRecord {
            id: date.to_string(),
            amount,
            category: "general".to_string(),
            description: None,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind: RecordKind::Expense,
            created_at: Utc::now(),
        }
    }

    fn income(date: &str, amount: i64) -> LedgerRecord {
        LedgerRecord {
            kind: RecordKind::Income,
            ..expense(date, amount)
        }
    }

    fn months(pairs: &[(&str, i64)]) -> Vec<(String, i64)> {
        pairs.iter().map(|(m, v)| (m.to_string(), *v)).collect()
    }

    #[test]
    fn excludes_the_in_progress_month() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let records = vec![
            expense("2025-04-10", 100),
            expense("2025-05-03", 200),
            expense("2025-05-20", 50),
            expense("2025-06-01", 999),
        ];

        let settled = aggregate_settled_months(&records, today);

        assert_eq!(
            settled,
            months(&[("2025-04", 100), ("2025-05", 250)])
        );
    }

    #[test]
    fn ignores_income_records() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let records = vec![expense("2025-04-10", 100), income("2025-04-12", 5_000)];

        let settled = aggregate_settled_months(&records, today);

        assert_eq!(settled, months(&[("2025-04", 100)]));
    }

    #[test]
    fn months_sort_chronologically_across_years() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let records = vec![expense("2025-01-10", 2), expense("2024-12-10", 1)];

        let settled = aggregate_settled_months(&records, today);

        assert_eq!(settled, months(&[("2024-12", 1), ("2025-01", 2)]));
    }

    #[test]
    fn one_good_month_one_bad_month() {
        let stats = evaluate_history(
            &months(&[("2025-01", 25_000), ("2025-02", 35_000)]),
            30_000,
        );

        // Only the good month adds savings; the shortfall is not subtracted
        assert_eq!(stats.total_savings, 5_000);
        assert_eq!(stats.max_success_streak, 1);
        assert_eq!(stats.max_fail_streak, 1);
        assert!(stats.has_succeeded_once);
        assert!(stats.has_failed_once);
        assert!(!stats.has_super_save);
    }

    #[test]
    fn exactly_on_budget_counts_as_a_failure() {
        let stats = evaluate_history(&months(&[("2025-01", 30_000)]), 30_000);

        assert_eq!(stats.total_savings, 0);
        assert!(stats.has_failed_once);
        assert!(!stats.has_succeeded_once);
    }

    #[test]
    fn streak_maxima_survive_a_break() {
        let stats = evaluate_history(
            &months(&[
                ("2025-01", 10),
                ("2025-02", 10),
                ("2025-03", 10),
                ("2025-04", 999),
                ("2025-05", 10),
            ]),
            100,
        );

        assert_eq!(stats.max_success_streak, 3);
        assert_eq!(stats.max_fail_streak, 1);
    }

    #[test]
    fn super_save_requires_saving_more_than_the_month_spent() {
        let not_super = evaluate_history(&months(&[("2025-01", 60)]), 100);
        assert!(!not_super.has_super_save);

        let super_save = evaluate_history(&months(&[("2025-01", 40)]), 100);
        assert!(super_save.has_super_save);

        // savings == spent is not enough
        let boundary = evaluate_history(&months(&[("2025-01", 50)]), 100);
        assert!(!boundary.has_super_save);
    }

    #[test]
    fn empty_history_yields_default_stats() {
        let stats = evaluate_history(&[], 30_000);
        assert_eq!(stats, SavingsStats::default());
    }
}
