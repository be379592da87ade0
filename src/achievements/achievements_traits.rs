use crate::achievements::achievements_model::{AchievementDetails, AchievementState};
use crate::Result;

/// Trait for achievement repository operations
pub trait AchievementRepositoryTrait: Send + Sync {
    /// Inserts a state row for every catalog code that lacks one. Idempotent.
    fn ensure_seeded(&self, codes: &[&str]) -> Result<()>;
    fn get_states(&self) -> Result<Vec<AchievementState>>;
    /// Marks the given codes unlocked, stamping `unlocked_at` only where it
    /// was never set. One transaction for the whole batch.
    fn mark_unlocked(&self, codes: &[&str]) -> Result<()>;
    fn delete_all(&self) -> Result<usize>;
}

/// Trait for achievement service operations
pub trait AchievementServiceTrait: Send + Sync {
    fn list_achievements(&self) -> Result<Vec<AchievementDetails>>;
    fn reset_achievements(&self) -> Result<()>;
}
