//! Step Awards Shared Library
//!
//! The tracker core: aggregation over logged days, goal streaks, the award
//! catalog and its evaluator. Nothing here performs I/O; callers own the
//! entry collection and the unlocked-award records and pass them in.

pub mod awards;
pub mod calculations;
pub mod errors;
pub mod ledger;
pub mod models;
pub mod records;
pub mod streaks;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use awards::{
    AwardCatalog, AwardCount, AwardDefinition, AwardEvaluator, AwardKind, AwardRule, AwardStatus, Difficulty,
    EntryRule, EvaluationReport, Metric, UnlockSink,
};
pub use calculations::{aggregate, entries_in_range, week_bounds, AggregateStats};
pub use errors::*;
pub use ledger::UnlockLedger;
pub use models::{CalorieMethod, Entry, Settings, TrackerData, UnlockRecord, DEFAULT_STEP_GOAL};
pub use records::PersonalRecords;
pub use streaks::{best_streak, current_streak, current_streak_on, streak_summary, StreakSummary};
pub use units::*;
