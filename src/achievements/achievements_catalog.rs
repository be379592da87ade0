use std::collections::HashMap;

use crate::achievements::settlement::SavingsStats;

/// Condition under which an achievement fires.
///
/// Every threshold comparison is `>=`; `RecordCount` is judged against the
/// whole journal (current month included), all other variants against
/// settled-month statistics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockCondition {
    RecordCount(i64),
    TotalSavings(i64),
    FirstFail,
    FirstSuccess,
    FailStreak(u32),
    SuccessStreak(u32),
    SuperSave,
}

impl UnlockCondition {
    pub fn is_met(&self, stats: &SavingsStats, record_count: i64) -> bool {
        match self {
            UnlockCondition::RecordCount(n) => record_count >= *n,
            UnlockCondition::TotalSavings(n) => stats.total_savings >= *n,
            UnlockCondition::FirstFail => stats.has_failed_once,
            UnlockCondition::FirstSuccess => stats.has_succeeded_once,
            UnlockCondition::FailStreak(n) => stats.max_fail_streak >= *n,
            UnlockCondition::SuccessStreak(n) => stats.max_success_streak >= *n,
            UnlockCondition::SuperSave => stats.has_super_save,
        }
    }
}

/// Static definition of one achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDef {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tier: i32,
    pub icon: &'static str,
    pub condition: UnlockCondition,
}

/// The full catalog in unlock-evaluation order: the immediate record-count
/// achievement first, then savings thresholds ascending, then the
/// streak families, then the compound super-save.
pub const CATALOG: &[AchievementDef] = &[
    AchievementDef {
        code: "first_expense",
        name: "First Entry",
        description: "Journal your first record",
        tier: 1,
        icon: "🔰",
        condition: UnlockCondition::RecordCount(1),
    },
    AchievementDef {
        code: "save_1",
        name: "First Cent",
        description: "Accumulate $1 of settled savings",
        tier: 1,
        icon: "🧘",
        condition: UnlockCondition::TotalSavings(1),
    },
    AchievementDef {
        code: "save_300",
        name: "Pocket Change",
        description: "Accumulate $300 of settled savings",
        tier: 2,
        icon: "🍱",
        condition: UnlockCondition::TotalSavings(300),
    },
    AchievementDef {
        code: "save_1000",
        name: "Piggy Bank",
        description: "Accumulate $1,000 of settled savings",
        tier: 2,
        icon: "🦸",
        condition: UnlockCondition::TotalSavings(1_000),
    },
    AchievementDef {
        code: "save_5000",
        name: "Bean Counter",
        description: "Accumulate $5,000 of settled savings",
        tier: 3,
        icon: "🧮",
        condition: UnlockCondition::TotalSavings(5_000),
    },
    AchievementDef {
        code: "save_10000",
        name: "Golden Cushion",
        description: "Accumulate $10,000 of settled savings",
        tier: 4,
        icon: "🔔",
        condition: UnlockCondition::TotalSavings(10_000),
    },
    AchievementDef {
        code: "first_fail",
        name: "Stumble",
        description: "Overspend the budget in a settled month",
        tier: 1,
        icon: "🥴",
        condition: UnlockCondition::FirstFail,
    },
    AchievementDef {
        code: "first_success",
        name: "On Target",
        description: "Stay under budget in a settled month",
        tier: 2,
        icon: "🎯",
        condition: UnlockCondition::FirstSuccess,
    },
    AchievementDef {
        code: "fail_streak_3",
        name: "Rough Patch",
        description: "Overspend three settled months in a row",
        tier: 2,
        icon: "🌪️",
        condition: UnlockCondition::FailStreak(3),
    },
    AchievementDef {
        code: "success_streak_3",
        name: "Momentum",
        description: "Stay under budget three settled months in a row",
        tier: 3,
        icon: "🍃",
        condition: UnlockCondition::SuccessStreak(3),
    },
    AchievementDef {
        code: "fail_streak_6",
        name: "Freefall",
        description: "Overspend six settled months in a row",
        tier: 3,
        icon: "🔥",
        condition: UnlockCondition::FailStreak(6),
    },
    AchievementDef {
        code: "success_streak_6",
        name: "Steady Hands",
        description: "Stay under budget six settled months in a row",
        tier: 4,
        icon: "⛰️",
        condition: UnlockCondition::SuccessStreak(6),
    },
    AchievementDef {
        code: "super_save",
        name: "Master Saver",
        description: "Save more in one settled month than that month's spending",
        tier: 4,
        icon: "📜",
        condition: UnlockCondition::SuperSave,
    },
];

/// Prerequisite forest: achievement code -> its direct parent.
/// Tier-1 roots have no entry.
const PREREQUISITES: &[(&str, &str)] = &[
    ("save_300", "save_1"),
    ("save_1000", "save_300"),
    ("save_5000", "save_1000"),
    ("save_10000", "save_5000"),
    ("success_streak_3", "first_success"),
    ("success_streak_6", "success_streak_3"),
    ("fail_streak_3", "first_fail"),
    ("fail_streak_6", "fail_streak_3"),
    ("super_save", "success_streak_3"),
];

pub fn prerequisite_map() -> HashMap<&'static str, &'static str> {
    PREREQUISITES.iter().copied().collect()
}

pub fn catalog_codes() -> Vec<&'static str> {
    CATALOG.iter().map(|def| def.code).collect()
}
