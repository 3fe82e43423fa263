//! Award difficulty classification
//!
//! Difficulty is derived on every query and never stored, so retuning the
//! bands applies to awards that were unlocked in the past.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AwardDefinition, AwardRule, Metric};

/// How hard an award is to earn
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Anyone can do it on a first walk
    Beginner,
    /// Casual daily walking
    Easy,
    /// Regular active walking
    Medium,
    /// Dedicated walking
    Hard,
    /// High milestones, long streaks, long distances
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Beginner,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}

// ============================================================================
// Id Allow-Lists (entry and streak awards)
// ============================================================================

const BEGINNER_IDS: &[&str] = &[
    "first_entry", "steps_500", "steps_1k", "steps_2k", "steps_2500",
    "time_5min", "time_10min", "time_15min",
    "calories_25", "calories_50",
    "distance_500m", "distance_1km", "distance_2km",
    "streak_2",
    "short_walk",
];

const EASY_IDS: &[&str] = &[
    "steps_3k", "steps_4k", "steps_5k", "steps_6k",
    "time_20min", "time_25min", "time_30min",
    "calories_100", "calories_150",
    "distance_3km", "distance_4km", "distance_5km",
    "streak_3", "streak_7",
    "morning_person",
];

const MEDIUM_IDS: &[&str] = &[
    "steps_7500", "steps_8k", "steps_9k", "steps_10k",
    "time_35min", "time_45min", "time_50min", "time_1hr",
    "calories_175", "calories_200", "calories_225", "calories_250", "calories_300",
    "distance_6km", "distance_7km", "distance_8km",
    "streak_14",
    "perfect_10k", "nice_steps", "lucky_7", "round_number", "consistent_steps", "steady_pace",
];

const HARD_IDS: &[&str] = &[
    "steps_11k", "steps_12500", "steps_13k", "steps_15k",
    "time_75min", "time_90min", "time_100min", "time_2hr",
    "calories_350", "calories_400", "calories_500",
    "distance_9km", "distance_10km", "distance_11km", "distance_12km",
    "streak_21", "streak_30",
    "double_goal", "balanced_walk",
];

// ============================================================================
// Threshold Bands (cumulative awards)
// ============================================================================

/// Upper bounds for a metric: beginner is strictly below the first value,
/// the remaining bands are inclusive of their bound
struct Bands {
    beginner_below: f64,
    easy_max: f64,
    medium_max: f64,
    hard_max: f64,
}

const fn bands(metric: Metric) -> Bands {
    match metric {
        Metric::Steps => Bands {
            beginner_below: 10_000.0,
            easy_max: 50_000.0,
            medium_max: 100_000.0,
            hard_max: 250_000.0,
        },
        Metric::Distance => Bands {
            beginner_below: 10.0,
            easy_max: 50.0,
            medium_max: 100.0,
            hard_max: 250.0,
        },
        Metric::Calories => Bands {
            beginner_below: 1000.0,
            easy_max: 5000.0,
            medium_max: 10_000.0,
            hard_max: 25_000.0,
        },
    }
}

fn classify_threshold(metric: Metric, threshold: f64) -> Difficulty {
    let b = bands(metric);
    if threshold < b.beginner_below {
        Difficulty::Beginner
    } else if threshold <= b.easy_max {
        Difficulty::Easy
    } else if threshold <= b.medium_max {
        Difficulty::Medium
    } else if threshold <= b.hard_max {
        Difficulty::Hard
    } else {
        Difficulty::Expert
    }
}

fn classify_id(id: &str) -> Difficulty {
    if BEGINNER_IDS.contains(&id) {
        Difficulty::Beginner
    } else if EASY_IDS.contains(&id) {
        Difficulty::Easy
    } else if MEDIUM_IDS.contains(&id) {
        Difficulty::Medium
    } else if HARD_IDS.contains(&id) {
        Difficulty::Hard
    } else {
        Difficulty::Expert
    }
}

/// Classify an award's difficulty
///
/// Cumulative awards are banded by their metric and threshold; entry and
/// streak awards by membership in the fixed id lists, defaulting to expert.
pub fn classify(def: &AwardDefinition) -> Difficulty {
    match def.rule {
        AwardRule::Cumulative { metric, threshold } => classify_threshold(metric, threshold),
        AwardRule::Entry(_) | AwardRule::Streak { .. } => classify_id(def.id),
    }
}
