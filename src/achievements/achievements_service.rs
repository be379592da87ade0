use chrono::Utc;
use log::{debug, error};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::achievements::achievements_catalog::{catalog_codes, prerequisite_map, CATALOG};
use crate::achievements::achievements_model::{AchievementDetails, AchievementState};
use crate::achievements::achievements_traits::{
    AchievementRepositoryTrait, AchievementServiceTrait,
};
use crate::achievements::resolver::resolve_unlocks;
use crate::achievements::settlement::{aggregate_settled_months, evaluate_history};
use crate::budget::BudgetRepositoryTrait;
use crate::constants::DEFAULT_MONTHLY_LIMIT;
use crate::ledger::LedgerRepositoryTrait;
use crate::Result;

/// Service running the achievement engine.
///
/// The unlock pass is evaluated inline on every listing read; it is linear
/// in ledger size and idempotent, so there is no background scheduler.
pub struct AchievementService {
    achievement_repository: Arc<dyn AchievementRepositoryTrait>,
    ledger_repository: Arc<dyn LedgerRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl AchievementService {
    pub fn new(
        achievement_repository: Arc<dyn AchievementRepositoryTrait>,
        ledger_repository: Arc<dyn LedgerRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
    ) -> Self {
        Self {
            achievement_repository,
            ledger_repository,
            budget_repository,
        }
    }

    /// Runs one unlock pass over the settled history and persists any new
    /// unlocks in a single batch.
    fn run_unlock_pass(&self) -> Result<()> {
        let record_count = self.ledger_repository.record_count()?;
        if record_count == 0 {
            // Empty journal: nothing can fire yet
            return Ok(());
        }

        let expenses = self.ledger_repository.get_expense_records()?;
        let monthly_limit = self
            .budget_repository
            .get_policy()?
            .map(|policy| policy.monthly_limit)
            .unwrap_or(DEFAULT_MONTHLY_LIMIT);

        let settled = aggregate_settled_months(&expenses, Utc::now().date_naive());
        let stats = evaluate_history(&settled, monthly_limit);

        let unlocked: HashSet<String> = self
            .achievement_repository
            .get_states()?
            .into_iter()
            .filter(|state| state.is_unlocked)
            .map(|state| state.code)
            .collect();

        let newly_unlocked = resolve_unlocks(
            CATALOG,
            &prerequisite_map(),
            &stats,
            record_count,
            &unlocked,
        );

        if !newly_unlocked.is_empty() {
            debug!("Unlocking achievements: {:?}", newly_unlocked);
            self.achievement_repository.mark_unlocked(&newly_unlocked)?;
        }

        Ok(())
    }
}

impl AchievementServiceTrait for AchievementService {
    fn list_achievements(&self) -> Result<Vec<AchievementDetails>> {
        self.achievement_repository.ensure_seeded(&catalog_codes())?;

        // The pass may never fail the surrounding read; a broken evaluation
        // serves the stored state unchanged
        if let Err(e) = self.run_unlock_pass() {
            error!("Achievement evaluation failed, serving stored state: {}", e);
        }

        let states: HashMap<String, AchievementState> = self
            .achievement_repository
            .get_states()?
            .into_iter()
            .map(|state| (state.code.clone(), state))
            .collect();

        let mut details: Vec<AchievementDetails> = CATALOG
            .iter()
            .map(|def| {
                let state = states.get(def.code);
                AchievementDetails {
                    code: def.code.to_string(),
                    name: def.name.to_string(),
                    description: def.description.to_string(),
                    tier: def.tier,
                    icon: def.icon.to_string(),
                    is_unlocked: state.map(|s| s.is_unlocked).unwrap_or(false),
                    unlocked_at: state.and_then(|s| s.unlocked_at),
                }
            })
            .collect();

        // Stable sort: catalog order breaks ties within a tier
        details.sort_by_key(|detail| detail.tier);

        Ok(details)
    }

    fn reset_achievements(&self) -> Result<()> {
        let deleted = self.achievement_repository.delete_all()?;
        debug!("Cleared {} achievement rows", deleted);
        Ok(())
    }
}
