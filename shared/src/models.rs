//! Data models for the step tracker

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculations::{calculate_calories, calculate_distance};
use crate::errors::TrackerError;
use crate::records::PersonalRecords;
use crate::units::UnitSystem;

/// Fallback step goal used when a stored goal is zero
pub const DEFAULT_STEP_GOAL: u32 = 10_000;

/// One logged day of walking activity
///
/// The date is the unique key: a collection holds at most one entry per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub steps: u32,
    #[serde(default)]
    pub time_minutes: u32,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default)]
    pub calories: u32,
}

impl Entry {
    /// Create an entry with explicit values
    pub fn new(date: NaiveDate, steps: u32, time_minutes: u32, distance_km: f64, calories: u32) -> Self {
        Self {
            id: None,
            date,
            steps,
            time_minutes,
            distance_km,
            calories,
        }
    }

    /// Build an entry from what the user typed, deriving distance and
    /// calories from the settings
    pub fn from_log(date: NaiveDate, steps: u32, time_minutes: u32, settings: &Settings) -> Self {
        let distance_km = calculate_distance(steps, settings.stride_length_cm);
        let calories = calculate_calories(
            steps,
            settings.weight_kg,
            time_minutes,
            settings.calorie_method,
            settings.calories_per_step_override,
        );

        Self::new(date, steps, time_minutes, distance_km, calories)
    }

    /// Average cadence in steps per minute, if any time was logged
    pub fn cadence(&self) -> Option<f64> {
        (self.time_minutes > 0).then(|| self.steps as f64 / self.time_minutes as f64)
    }
}

/// How calories are estimated for a logged entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalorieMethod {
    /// Flat 0.04 kcal per step
    Simple,
    /// Metabolic equivalent of moderate walking (3.5 MET) over the logged duration
    #[default]
    Met,
}

/// User settings and preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub height_cm: u32,
    pub weight_kg: f64,
    pub stride_length_cm: u32,
    pub daily_step_goal: u32,
    pub calories_per_step_override: Option<f64>,
    pub units: UnitSystem,
    pub calorie_method: CalorieMethod,
    /// When false, Saturdays and Sundays neither extend nor break a streak
    pub include_weekends: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            height_cm: 175,
            weight_kg: 70.0,
            stride_length_cm: 75,
            daily_step_goal: 5000,
            calories_per_step_override: None,
            units: UnitSystem::Imperial,
            calorie_method: CalorieMethod::Met,
            include_weekends: false,
        }
    }
}

impl Settings {
    /// The daily goal with a zero goal coerced to [`DEFAULT_STEP_GOAL`]
    pub fn effective_goal(&self) -> u32 {
        effective_goal(self.daily_step_goal)
    }
}

/// Coerce an unusable goal to the default
pub fn effective_goal(goal: u32) -> u32 {
    if goal == 0 {
        DEFAULT_STEP_GOAL
    } else {
        goal
    }
}

/// Persisted marker that an award has been earned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRecord {
    #[serde(rename = "id")]
    pub award_id: String,
    #[serde(rename = "date")]
    pub date_unlocked: NaiveDate,
    #[serde(default)]
    pub viewed: bool,
}

impl UnlockRecord {
    pub fn new(award_id: impl Into<String>, date_unlocked: NaiveDate) -> Self {
        Self {
            award_id: award_id.into(),
            date_unlocked,
            viewed: false,
        }
    }
}

/// Everything a user has stored: the shape of an exported data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerData {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub awards: Vec<UnlockRecord>,
    #[serde(default)]
    pub records: PersonalRecords,
}

impl TrackerData {
    /// Parse an exported data document
    pub fn from_json(json: &str) -> Result<Self, TrackerError> {
        serde_json::from_str(json).map_err(|e| TrackerError::Parse(e.to_string()))
    }

    /// Serialize back to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, TrackerError> {
        serde_json::to_string_pretty(self).map_err(|e| TrackerError::Parse(e.to_string()))
    }

    /// Insert or replace the entry for its date, folding it into the
    /// personal records
    pub fn upsert_entry(&mut self, entry: Entry) {
        self.records.update(&entry);
        match self.entries.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self.entries.sort_by(|a, b| b.date.cmp(&a.date));
    }
}
