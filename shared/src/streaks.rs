//! Goal streak calculations
//!
//! A streak is a run of consecutive days on which the daily step goal was met.
//! Two policies shape it:
//!
//! - **Grace day**: an unfinished today below goal does not end the streak;
//!   counting starts from yesterday instead.
//! - **Weekend exclusion**: with `include_weekends = false`, a missed Saturday
//!   or Sunday is skipped rather than breaking the run. A met weekend day still
//!   counts.
//!
//! A day with an entry of zero steps and a day with no entry are the same miss.

use std::collections::HashMap;

use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::{effective_goal, Entry, Settings};

/// Longest backward walk for the current streak (ten years of days)
pub const MAX_STREAK_LOOKBACK_DAYS: u32 = 3650;

/// Current and best streak for a history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current: u32,
    pub best: u32,
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn steps_by_date(entries: &[Entry]) -> HashMap<NaiveDate, u32> {
    entries.iter().map(|e| (e.date, e.steps)).collect()
}

/// Current streak as of the local calendar day
pub fn current_streak(entries: &[Entry], goal: u32, include_weekends: bool) -> u32 {
    current_streak_on(entries, goal, include_weekends, Local::now().date_naive())
}

/// Current streak as of `today`
pub fn current_streak_on(entries: &[Entry], goal: u32, include_weekends: bool, today: NaiveDate) -> u32 {
    if entries.is_empty() {
        return 0;
    }

    let goal = effective_goal(goal);
    let steps = steps_by_date(entries);
    let steps_on = |day: NaiveDate| steps.get(&day).copied().unwrap_or(0);

    let mut day = if steps_on(today) >= goal {
        Some(today)
    } else {
        today.pred_opt()
    };

    let mut streak = 0;
    for _ in 0..MAX_STREAK_LOOKBACK_DAYS {
        // The walk ends at the first representable date
        let Some(current) = day else {
            break;
        };
        if steps_on(current) >= goal {
            streak += 1;
        } else if !include_weekends && is_weekend(current) {
            // skipped
        } else {
            break;
        }
        day = current.pred_opt();
    }

    trace!(streak, %today, goal, include_weekends, "current streak computed");
    streak
}

/// Longest streak anywhere in the history
///
/// Walks every calendar day from the earliest to the latest entry, so a gap
/// with no entries breaks the run just like a logged miss.
pub fn best_streak(entries: &[Entry], goal: u32, include_weekends: bool) -> u32 {
    let (Some(first), Some(last)) = (
        entries.iter().map(|e| e.date).min(),
        entries.iter().map(|e| e.date).max(),
    ) else {
        return 0;
    };

    let goal = effective_goal(goal);
    let steps = steps_by_date(entries);

    let mut best = 0;
    let mut running = 0;
    let mut day = Some(first);
    while let Some(current) = day.filter(|d| *d <= last) {
        if steps.get(&current).copied().unwrap_or(0) >= goal {
            running += 1;
            best = best.max(running);
        } else if include_weekends || !is_weekend(current) {
            running = 0;
        }
        day = current.succ_opt();
    }

    trace!(best, %first, %last, goal, include_weekends, "best streak computed");
    best
}

/// Both streaks under the user's settings
pub fn streak_summary(entries: &[Entry], settings: &Settings, today: NaiveDate) -> StreakSummary {
    StreakSummary {
        current: current_streak_on(entries, settings.daily_step_goal, settings.include_weekends, today),
        best: best_streak(entries, settings.daily_step_goal, settings.include_weekends),
    }
}
