/// Record kinds
pub const RECORD_KIND_EXPENSE: &str = "expense";
pub const RECORD_KIND_INCOME: &str = "income";

/// Date format accepted by the journal-entry API
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";
