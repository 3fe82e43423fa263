//! Award definitions and evaluation
//!
//! Awards come in three families:
//!
//! - **Entry** awards test a single logged day (e.g. "10,000 steps in a day")
//! - **Cumulative** awards compare a lifetime total against a threshold
//! - **Streak** awards compare the current goal streak against a day count
//!
//! Definitions are plain data in an [`AwardCatalog`]; the
//! [`AwardEvaluator`] decides which of them an entry, a set of totals, or a
//! streak satisfies.

pub mod catalog;
pub mod difficulty;
pub mod evaluator;

pub use catalog::AwardCatalog;
pub use difficulty::{classify, Difficulty};
pub use evaluator::{AwardCount, AwardEvaluator, AwardStatus, EvaluationReport, UnlockSink};

use chrono::{Datelike, Weekday};
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::calculations::AggregateStats;
use crate::models::{Entry, Settings};

static BINARY_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[01]+$").expect("valid regex"));

/// Lifetime total a cumulative award is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Steps,
    Distance,
    Calories,
}

impl Metric {
    /// Pick this metric's total out of aggregated stats
    pub fn value_in(&self, stats: &AggregateStats) -> f64 {
        match self {
            Metric::Steps => stats.total_steps as f64,
            Metric::Distance => stats.total_distance_km,
            Metric::Calories => stats.total_calories as f64,
        }
    }
}

/// Which evaluation family an award belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AwardKind {
    Entry,
    Cumulative,
    Streak,
}

/// Predicate over a single logged day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum EntryRule {
    MinSteps { steps: u32 },
    StepsBetween { min: u32, max: u32 },
    /// Steps rounded to the nearest hundred equal one of the values
    RoundedSteps { values: &'static [u32] },
    ExactSteps { values: &'static [u32] },
    MinDistanceKm { km: f64 },
    MinMinutes { minutes: u32 },
    MinutesBetween { min: u32, max: u32 },
    /// Some time logged, but less than `minutes`
    MinutesUnder { minutes: u32 },
    MinCalories { calories: u32 },
    /// Steps per minute within `[min, max]`
    CadenceBetween { min: f64, max: f64 },
    /// Distance in km within one of a tenth of the minutes walked
    BalancedPace,
    /// At least `steps` on a Saturday or Sunday, only while weekends count
    WeekendSteps { steps: u32 },
    PalindromeSteps { above: u32 },
    /// Step count ends in three identical digits
    RepeatedEnding { above: u32 },
    /// Step count written only with ones and zeros
    BinarySteps { above: u32 },
}

impl EntryRule {
    /// Whether the entry satisfies this rule
    pub fn matches(&self, entry: &Entry, settings: &Settings) -> bool {
        let steps = entry.steps;
        let minutes = entry.time_minutes;

        match *self {
            EntryRule::MinSteps { steps: min } => steps >= min,
            EntryRule::StepsBetween { min, max } => (min..=max).contains(&steps),
            EntryRule::RoundedSteps { values } => {
                let rounded = ((f64::from(steps) / 100.0).round() * 100.0) as u32;
                values.contains(&rounded)
            }
            EntryRule::ExactSteps { values } => values.contains(&steps),
            EntryRule::MinDistanceKm { km } => entry.distance_km >= km,
            EntryRule::MinMinutes { minutes: min } => minutes >= min,
            EntryRule::MinutesBetween { min, max } => (min..=max).contains(&minutes),
            EntryRule::MinutesUnder { minutes: limit } => minutes > 0 && minutes < limit,
            EntryRule::MinCalories { calories } => entry.calories >= calories,
            EntryRule::CadenceBetween { min, max } => entry
                .cadence()
                .map_or(false, |cadence| cadence >= min && cadence <= max),
            EntryRule::BalancedPace => {
                minutes > 0 && (entry.distance_km - f64::from(minutes) / 10.0).abs() < 1.0
            }
            EntryRule::WeekendSteps { steps: min } => {
                settings.include_weekends
                    && matches!(entry.date.weekday(), Weekday::Sat | Weekday::Sun)
                    && steps >= min
            }
            EntryRule::PalindromeSteps { above } => {
                let digits = steps.to_string();
                steps > above && digits.chars().eq(digits.chars().rev())
            }
            EntryRule::RepeatedEnding { above } => {
                let digits = steps.to_string().into_bytes();
                steps > above && digits.len() >= 3 && {
                    let tail = &digits[digits.len() - 3..];
                    tail[0] == tail[1] && tail[1] == tail[2]
                }
            }
            EntryRule::BinarySteps { above } => {
                steps > above && BINARY_DIGITS.is_match(&steps.to_string())
            }
        }
    }
}

/// How an award is earned
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AwardRule {
    Entry(EntryRule),
    Cumulative { metric: Metric, threshold: f64 },
    Streak { days: u32 },
}

/// Immutable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AwardDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rule: AwardRule,
}

impl AwardDefinition {
    pub const fn entry(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        icon: &'static str,
        rule: EntryRule,
    ) -> Self {
        Self {
            id,
            title,
            description,
            icon,
            rule: AwardRule::Entry(rule),
        }
    }

    pub const fn cumulative(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        icon: &'static str,
        metric: Metric,
        threshold: f64,
    ) -> Self {
        Self {
            id,
            title,
            description,
            icon,
            rule: AwardRule::Cumulative { metric, threshold },
        }
    }

    pub const fn streak(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        icon: &'static str,
        days: u32,
    ) -> Self {
        Self {
            id,
            title,
            description,
            icon,
            rule: AwardRule::Streak { days },
        }
    }

    pub fn kind(&self) -> AwardKind {
        match self.rule {
            AwardRule::Entry(_) => AwardKind::Entry,
            AwardRule::Cumulative { .. } => AwardKind::Cumulative,
            AwardRule::Streak { .. } => AwardKind::Streak,
        }
    }

    /// Numeric target for threshold-style awards
    pub fn threshold(&self) -> Option<f64> {
        match self.rule {
            AwardRule::Entry(_) => None,
            AwardRule::Cumulative { threshold, .. } => Some(threshold),
            AwardRule::Streak { days } => Some(f64::from(days)),
        }
    }

    /// Metric for cumulative awards
    pub fn metric(&self) -> Option<Metric> {
        match self.rule {
            AwardRule::Cumulative { metric, .. } => Some(metric),
            _ => None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        classify(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn entry(steps: u32, minutes: u32, km: f64) -> Entry {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(); // Wednesday
        Entry::new(date, steps, minutes, km, 0)
    }

    fn check(rule: EntryRule, e: &Entry) -> bool {
        rule.matches(e, &Settings::default())
    }

    #[rstest]
    #[case(1221, true)]
    #[case(5665, true)]
    #[case(12321, true)]
    #[case(1000, false)]
    #[case(999, false)] // palindrome but not above 1000
    #[case(1234, false)]
    fn test_palindrome(#[case] steps: u32, #[case] expected: bool) {
        assert_eq!(check(EntryRule::PalindromeSteps { above: 1000 }, &entry(steps, 0, 0.0)), expected);
    }

    #[rstest]
    #[case(5777, true)]
    #[case(10000, true)]
    #[case(1000, false)] // not above 1000
    #[case(5778, false)]
    fn test_repeated_ending(#[case] steps: u32, #[case] expected: bool) {
        assert_eq!(check(EntryRule::RepeatedEnding { above: 1000 }, &entry(steps, 0, 0.0)), expected);
    }

    #[rstest]
    #[case(10110, true)]
    #[case(101, true)]
    #[case(100, false)] // not above 100
    #[case(10210, false)]
    fn test_binary_steps(#[case] steps: u32, #[case] expected: bool) {
        assert_eq!(check(EntryRule::BinarySteps { above: 100 }, &entry(steps, 0, 0.0)), expected);
    }

    #[test]
    fn test_rounded_steps() {
        let rule = EntryRule::RoundedSteps { values: &[5000, 10000] };
        assert!(check(rule, &entry(4950, 0, 0.0)));
        assert!(check(rule, &entry(10049, 0, 0.0)));
        assert!(!check(rule, &entry(4949, 0, 0.0)));
    }

    #[test]
    fn test_cadence_and_balance() {
        let cadence = EntryRule::CadenceBetween { min: 80.0, max: 120.0 };
        assert!(check(cadence, &entry(3000, 30, 0.0)));
        assert!(!check(cadence, &entry(3000, 0, 0.0)));
        assert!(!check(cadence, &entry(6000, 30, 0.0)));

        assert!(check(EntryRule::BalancedPace, &entry(0, 30, 3.5)));
        assert!(!check(EntryRule::BalancedPace, &entry(0, 30, 4.0)));
        assert!(!check(EntryRule::BalancedPace, &entry(0, 0, 0.0)));
    }

    #[test]
    fn test_weekend_steps_respects_settings() {
        let saturday = Entry::new(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(), 12_000, 0, 0.0, 0);
        let rule = EntryRule::WeekendSteps { steps: 10_000 };
        let weekends_on = Settings {
            include_weekends: true,
            ..Settings::default()
        };

        assert!(rule.matches(&saturday, &weekends_on));
        assert!(!rule.matches(&saturday, &Settings::default()));
        assert!(!rule.matches(&entry(12_000, 0, 0.0), &weekends_on));
    }

    #[test]
    fn test_short_walk() {
        let rule = EntryRule::MinutesUnder { minutes: 5 };
        assert!(check(rule, &entry(0, 4, 0.0)));
        assert!(!check(rule, &entry(0, 0, 0.0)));
        assert!(!check(rule, &entry(0, 5, 0.0)));
    }

    #[test]
    fn test_metric_value_in() {
        let stats = AggregateStats {
            total_steps: 12,
            total_distance_km: 3.5,
            total_calories: 40,
            ..AggregateStats::default()
        };
        assert_eq!(Metric::Steps.value_in(&stats), 12.0);
        assert_eq!(Metric::Distance.value_in(&stats), 3.5);
        assert_eq!(Metric::Calories.value_in(&stats), 40.0);
    }
}
