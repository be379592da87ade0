use chrono::{Datelike, Duration, Utc};
use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::constants::RECORD_DELETE_WINDOW_HOURS;
use crate::ledger::ledger_errors::LedgerError;
use crate::ledger::ledger_model::{AnnualSummary, LedgerRecord, NewLedgerRecord, RecordKind};
use crate::ledger::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::Result;

/// Service for managing journal records
pub struct LedgerService {
    repository: Arc<dyn LedgerRepositoryTrait>,
}

impl LedgerService {
    pub fn new(repository: Arc<dyn LedgerRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Folds records into per-year income/expense totals and derives
    /// year-over-year growth for the three most recent calendar years.
    fn build_annual_summaries(records: &[LedgerRecord], current_year: i32) -> Vec<AnnualSummary> {
        let start_year = current_year - 2;

        let mut by_year: BTreeMap<i32, (i64, i64)> = BTreeMap::new();
        for record in records {
            let year = record.date.year();
            if year < start_year {
                continue;
            }
            let entry = by_year.entry(year).or_insert((0, 0));
            match record.kind {
                RecordKind::Income => entry.0 += record.amount,
                RecordKind::Expense => entry.1 += record.amount,
            }
        }

        let mut summaries = Vec::with_capacity(by_year.len());
        let mut previous_profit: Option<i64> = None;

        for (year, (income, expense)) in by_year {
            let profit = income - expense;

            let growth_pct = match previous_profit {
                Some(prev) if prev != 0 => {
                    Some(((profit - prev) as f64 / prev.abs() as f64) * 100.0)
                }
                _ => None,
            };

            summaries.push(AnnualSummary {
                year,
                total_income: income,
                total_expense: expense,
                net_profit: profit,
                growth_pct,
            });

            previous_profit = Some(profit);
        }

        // Newest year first for presentation
        summaries.reverse();
        summaries
    }
}

impl LedgerServiceTrait for LedgerService {
    fn add_record(&self, new_record: NewLedgerRecord) -> Result<LedgerRecord> {
        new_record.validate()?;
        self.repository.create_record(new_record)
    }

    fn list_records(&self, offset: i64, limit: i64) -> Result<Vec<LedgerRecord>> {
        self.repository.list_records(offset, limit)
    }

    fn delete_record(&self, record_id: &str) -> Result<LedgerRecord> {
        let record = self.repository.get_record(record_id)?;

        let age = Utc::now().signed_duration_since(record.created_at);
        if age > Duration::hours(RECORD_DELETE_WINDOW_HOURS) {
            return Err(LedgerError::DeletionLocked {
                age_hours: age.num_hours(),
                window_hours: RECORD_DELETE_WINDOW_HOURS,
            }
            .into());
        }

        self.repository.delete_record(record_id)
    }

    fn record_count(&self) -> Result<i64> {
        self.repository.record_count()
    }

    fn get_annual_summary(&self) -> Result<Vec<AnnualSummary>> {
        debug!("Building annual profit summary");
        let records = self.repository.get_records()?;
        let current_year = Utc::now().date_naive().year();
        Ok(Self::build_annual_summaries(&records, current_year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn record(date: &str, amount: i64, kind: RecordKind) -> LedgerRecord {
        LedgerRecord {
            id: Uuid::new_v4().to_string(),
            amount,
            category: "general".to_string(),
            description: None,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn annual_summary_growth_and_ordering() {
        let records = vec![
            record("2024-03-10", 300, RecordKind::Income),
            record("2024-05-02", 200, RecordKind::Expense),
            record("2025-01-15", 400, RecordKind::Income),
            record("2025-02-20", 250, RecordKind::Expense),
        ];

        let summaries = LedgerService::build_annual_summaries(&records, 2025);

        assert_eq!(summaries.len(), 2);
        // Newest first
        assert_eq!(summaries[0].year, 2025);
        assert_eq!(summaries[0].net_profit, 150);
        assert_eq!(summaries[0].growth_pct, Some(50.0));
        assert_eq!(summaries[1].year, 2024);
        assert_eq!(summaries[1].net_profit, 100);
        assert_eq!(summaries[1].growth_pct, None);
    }

    #[test]
    fn annual_summary_skips_growth_when_prior_profit_is_zero() {
        let records = vec![
            record("2024-03-10", 200, RecordKind::Income),
            record("2024-05-02", 200, RecordKind::Expense),
            record("2025-01-15", 500, RecordKind::Income),
        ];

        let summaries = LedgerService::build_annual_summaries(&records, 2025);

        assert_eq!(summaries[0].year, 2025);
        assert_eq!(summaries[0].growth_pct, None);
        assert_eq!(summaries[1].net_profit, 0);
    }

    #[test]
    fn annual_summary_uses_absolute_prior_profit_for_growth() {
        let records = vec![
            record("2024-03-10", 100, RecordKind::Income),
            record("2024-05-02", 300, RecordKind::Expense),
            record("2025-01-15", 100, RecordKind::Income),
        ];

        let summaries = LedgerService::build_annual_summaries(&records, 2025);

        // 2024 profit -200, 2025 profit 100: (100 - -200) / 200 * 100 = 150%
        assert_eq!(summaries[0].growth_pct, Some(150.0));
    }

    #[test]
    fn annual_summary_ignores_years_outside_window() {
        let records = vec![
            record("2021-03-10", 999, RecordKind::Income),
            record("2025-01-15", 100, RecordKind::Income),
        ];

        let summaries = LedgerService::build_annual_summaries(&records, 2025);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].year, 2025);
    }
}
