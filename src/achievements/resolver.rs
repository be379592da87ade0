use std::collections::{HashMap, HashSet};

use crate::achievements::achievements_catalog::AchievementDef;
use crate::achievements::settlement::SavingsStats;

/// Decides which achievements newly unlock, honoring the prerequisite
/// forest.
///
/// Walks `catalog` in its fixed evaluation order. An achievement is
/// collected when its condition holds, it is not already unlocked, and its
/// parent (if any) is unlocked — counting parents collected earlier in this
/// same pass, so a whole chain can fire in one call. Running the pass again
/// against the updated unlock state yields nothing new.
pub fn resolve_unlocks(
    catalog: &[AchievementDef],
    prerequisites: &HashMap<&'static str, &'static str>,
    stats: &SavingsStats,
    record_count: i64,
    unlocked: &HashSet<String>,
) -> Vec<&'static str> {
    let mut unlocked_this_pass: HashSet<&str> = HashSet::new();
    let mut newly_unlocked = Vec::new();

    for def in catalog {
        if unlocked.contains(def.code) || unlocked_this_pass.contains(def.code) {
            continue;
        }
        if !def.condition.is_met(stats, record_count) {
            continue;
        }
        if let Some(parent) = prerequisites.get(def.code) {
            if !unlocked.contains(*parent) && !unlocked_this_pass.contains(*parent) {
                continue;
            }
        }

        unlocked_this_pass.insert(def.code);
        newly_unlocked.push(def.code);
    }

    newly_unlocked
}
