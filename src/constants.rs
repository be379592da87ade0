/// Hours after creation during which a ledger record may still be deleted
pub const RECORD_DELETE_WINDOW_HOURS: i64 = 12;

/// Days the monthly budget stays locked after a successful change
pub const BUDGET_LOCK_DAYS: i64 = 90;

/// Monthly limit assumed while no budget policy row exists
pub const DEFAULT_MONTHLY_LIMIT: i64 = 30_000;

/// Categories stamped on auto-journaled trade results
pub const INVESTMENT_GAIN_CATEGORY: &str = "investment_gain";
pub const INVESTMENT_LOSS_CATEGORY: &str = "investment_loss";

/// Month key format used by the settlement aggregation
pub const MONTH_KEY_FORMAT: &str = "%Y-%m";
