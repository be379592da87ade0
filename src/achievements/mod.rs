pub(crate) mod achievements_catalog;
pub(crate) mod achievements_errors;
pub(crate) mod achievements_model;
pub(crate) mod achievements_repository;
pub(crate) mod achievements_service;
pub(crate) mod achievements_traits;
pub(crate) mod resolver;
pub(crate) mod settlement;

pub use achievements_catalog::{
    catalog_codes, prerequisite_map, AchievementDef, UnlockCondition, CATALOG,
};
pub use achievements_errors::{AchievementError, Result};
pub use achievements_model::{AchievementDetails, AchievementState, AchievementStateDB};
pub use achievements_repository::AchievementRepository;
pub use achievements_service::AchievementService;
pub use achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};
pub use resolver::resolve_unlocks;
pub use settlement::{aggregate_settled_months, evaluate_history, SavingsStats};
