//! Step calculations module
//!
//! Provides aggregation over logged entries, date-window helpers, and the
//! formulas used to derive distance and calories from a step count.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Total**: Every function returns a value for every input; empty or
//!    zero input yields zero output
//! 3. **Order Independent**: Entry collections may arrive in any order

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{CalorieMethod, Entry};

// ============================================================================
// Aggregation
// ============================================================================

/// Totals and averages over a set of entries
///
/// Absent fields deserialize as zero, so a partial stats document such as
/// `{"total_steps": 10000}` is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateStats {
    pub total_steps: u64,
    pub total_distance_km: f64,
    pub total_calories: u64,
    pub total_time_minutes: u64,
    /// Mean steps per logged day, rounded to the nearest step
    pub average_steps: u64,
    pub days_count: usize,
    /// Entry with the most steps; the earliest encountered wins ties
    pub best_day: Option<Entry>,
}

/// Sum and average a collection of entries
pub fn aggregate(entries: &[Entry]) -> AggregateStats {
    if entries.is_empty() {
        return AggregateStats::default();
    }

    let mut stats = AggregateStats {
        days_count: entries.len(),
        ..AggregateStats::default()
    };
    let mut best: Option<&Entry> = None;

    for entry in entries {
        stats.total_steps += u64::from(entry.steps);
        stats.total_distance_km += entry.distance_km;
        stats.total_calories += u64::from(entry.calories);
        stats.total_time_minutes += u64::from(entry.time_minutes);

        if best.map_or(true, |b| entry.steps > b.steps) {
            best = Some(entry);
        }
    }

    stats.average_steps = (stats.total_steps as f64 / entries.len() as f64).round() as u64;
    stats.best_day = best.cloned();
    stats
}

/// Entries whose date falls within `[start, end]`, in their original order
pub fn entries_in_range(entries: &[Entry], start: NaiveDate, end: NaiveDate) -> Vec<Entry> {
    entries
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect()
}

/// Monday and Sunday of the week containing `date`
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(date.weekday().num_days_from_monday());
    let monday = date - Duration::days(offset);
    (monday, monday + Duration::days(6))
}

/// Goal completion as a whole percentage, capped at 100
pub fn goal_percentage(current: u64, goal: u32) -> u32 {
    if goal == 0 {
        return 0;
    }
    let pct = (current as f64 / f64::from(goal) * 100.0).round();
    pct.min(100.0) as u32
}

// ============================================================================
// Derived Entry Values
// ============================================================================

/// Calories burned per step in the simple model
const CALORIES_PER_STEP: f64 = 0.04;

/// Metabolic equivalent of walking at a moderate pace
const WALKING_MET: f64 = 3.5;

/// Average stride as a fraction of body height
const STRIDE_HEIGHT_RATIO: f64 = 0.42;

/// Distance in kilometers covered by `steps` at the given stride
///
/// Formula: km = steps × stride(cm) / 100,000
pub fn calculate_distance(steps: u32, stride_length_cm: u32) -> f64 {
    if steps == 0 || stride_length_cm == 0 {
        return 0.0;
    }
    f64::from(steps) * f64::from(stride_length_cm) / 100_000.0
}

/// Estimate calories burned for a walk
///
/// A positive per-step override always wins. Otherwise:
/// - MET: kcal = 3.5 × weight(kg) × hours
/// - Simple: kcal = 0.04 × steps
pub fn calculate_calories(
    steps: u32,
    weight_kg: f64,
    time_minutes: u32,
    method: CalorieMethod,
    per_step_override: Option<f64>,
) -> u32 {
    if steps == 0 {
        return 0;
    }

    if let Some(per_step) = per_step_override.filter(|v| *v > 0.0) {
        return (f64::from(steps) * per_step).round() as u32;
    }

    match method {
        CalorieMethod::Met => {
            let hours = f64::from(time_minutes) / 60.0;
            (WALKING_MET * weight_kg * hours).round().max(0.0) as u32
        }
        CalorieMethod::Simple => (f64::from(steps) * CALORIES_PER_STEP).round() as u32,
    }
}

/// Estimate stride length in centimeters from body height
pub fn estimate_stride_length(height_cm: u32) -> u32 {
    (f64::from(height_cm) * STRIDE_HEIGHT_RATIO).round() as u32
}

/// Pace in minutes per kilometer, or 0 when no distance was covered
pub fn calculate_pace(time_minutes: u32, distance_km: f64) -> f64 {
    if distance_km <= 0.0 {
        return 0.0;
    }
    f64::from(time_minutes) / distance_km
}

/// Format a pace as `M:SS`, or `--:--` when there is none
pub fn format_pace(pace: f64) -> String {
    if pace <= 0.0 || !pace.is_finite() {
        return "--:--".to_string();
    }

    let mut minutes = pace.floor() as u64;
    let mut seconds = ((pace - pace.floor()) * 60.0).round() as u64;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }
    format!("{}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(d: &str, steps: u32) -> Entry {
        Entry::new(date(d), steps, steps / 100, steps as f64 * 0.00075, steps / 25)
    }

    // =========================================================================
    // Aggregation Tests
    // =========================================================================

    #[test]
    fn test_aggregate_empty() {
        let stats = aggregate(&[]);
        assert_eq!(stats, AggregateStats::default());
        assert!(stats.best_day.is_none());
        assert_eq!(stats.days_count, 0);
    }

    #[test]
    fn test_aggregate_totals() {
        let entries = vec![entry("2024-01-01", 1000), entry("2024-01-02", 3000), entry("2024-01-03", 2001)];
        let stats = aggregate(&entries);

        assert_eq!(stats.total_steps, 6001);
        assert_eq!(stats.total_calories, 40 + 120 + 80);
        assert_eq!(stats.total_time_minutes, 10 + 30 + 20);
        assert_eq!(stats.average_steps, 2000);
        assert_eq!(stats.days_count, 3);
        assert_eq!(stats.best_day.unwrap().date, date("2024-01-02"));
    }

    #[test]
    fn test_aggregate_best_day_first_wins_ties() {
        let entries = vec![entry("2024-01-05", 4000), entry("2024-01-01", 4000)];
        let stats = aggregate(&entries);
        assert_eq!(stats.best_day.unwrap().date, date("2024-01-05"));
    }

    #[test]
    fn test_aggregate_average_rounds() {
        let entries = vec![entry("2024-01-01", 1), entry("2024-01-02", 2)];
        assert_eq!(aggregate(&entries).average_steps, 2);
    }

    #[test]
    fn test_partial_stats_document_defaults_to_zero() {
        let stats: AggregateStats = serde_json::from_str(r#"{"total_steps":10000}"#).unwrap();
        assert_eq!(stats.total_steps, 10_000);
        assert_eq!(stats.total_distance_km, 0.0);
        assert_eq!(stats.days_count, 0);
        assert!(stats.best_day.is_none());
    }

    #[test]
    fn test_entries_in_range_inclusive() {
        let entries = vec![
            entry("2024-01-03", 1),
            entry("2024-01-01", 2),
            entry("2024-01-07", 3),
            entry("2024-01-08", 4),
        ];
        let found = entries_in_range(&entries, date("2024-01-01"), date("2024-01-07"));
        let steps: Vec<u32> = found.iter().map(|e| e.steps).collect();
        assert_eq!(steps, vec![1, 2, 3]);
    }

    #[rstest]
    #[case("2024-01-01", "2024-01-01", "2024-01-07")] // Monday
    #[case("2024-01-03", "2024-01-01", "2024-01-07")] // Wednesday
    #[case("2024-01-07", "2024-01-01", "2024-01-07")] // Sunday
    #[case("2024-03-01", "2024-02-26", "2024-03-03")] // across a leap month
    fn test_week_bounds(#[case] day: &str, #[case] monday: &str, #[case] sunday: &str) {
        assert_eq!(week_bounds(date(day)), (date(monday), date(sunday)));
    }

    #[test]
    fn test_goal_percentage() {
        assert_eq!(goal_percentage(2500, 5000), 50);
        assert_eq!(goal_percentage(12_000, 5000), 100);
        assert_eq!(goal_percentage(100, 0), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: totals are additive over any split of the collection
        #[test]
        fn prop_aggregate_additive(
            days in prop::collection::vec((0u32..60_000, 0.0f64..45.0), 0..40),
            split in 0usize..40
        ) {
            let start = date("2023-01-01");
            let entries: Vec<Entry> = days
                .iter()
                .enumerate()
                .map(|(i, (s, km))| Entry::new(start + Duration::days(i as i64), *s, s / 100, *km, s / 25))
                .collect();
            let split = split.min(entries.len());
            let (a, b) = entries.split_at(split);

            let whole = aggregate(&entries);
            let left = aggregate(a);
            let right = aggregate(b);

            prop_assert_eq!(left.total_steps + right.total_steps, whole.total_steps);
            prop_assert_eq!(left.total_calories + right.total_calories, whole.total_calories);
            prop_assert_eq!(left.total_time_minutes + right.total_time_minutes, whole.total_time_minutes);
            prop_assert_eq!(left.days_count + right.days_count, whole.days_count);
            prop_assert!((left.total_distance_km + right.total_distance_km - whole.total_distance_km).abs() < 1e-6);
        }

        /// Property: week bounds always span Monday to Sunday and contain the date
        #[test]
        fn prop_week_bounds_contain_date(offset in 0i64..5000) {
            let day = date("2015-01-01") + Duration::days(offset);
            let (monday, sunday) = week_bounds(day);
            prop_assert_eq!(monday.weekday(), chrono::Weekday::Mon);
            prop_assert_eq!(sunday.weekday(), chrono::Weekday::Sun);
            prop_assert!(monday <= day && day <= sunday);
        }
    }

    // =========================================================================
    // Derived Value Tests
    // =========================================================================

    #[test]
    fn test_distance_calculation() {
        assert!((calculate_distance(10_000, 75) - 7.5).abs() < 1e-9);
        assert_eq!(calculate_distance(0, 75), 0.0);
        assert_eq!(calculate_distance(1000, 0), 0.0);
    }

    #[test]
    fn test_calorie_methods() {
        // 70kg for one hour at 3.5 MET -> 245 kcal
        assert_eq!(calculate_calories(6000, 70.0, 60, CalorieMethod::Met, None), 245);
        assert_eq!(calculate_calories(6000, 70.0, 60, CalorieMethod::Simple, None), 240);
        assert_eq!(calculate_calories(6000, 70.0, 60, CalorieMethod::Met, Some(0.05)), 300);
        // A zero override is ignored
        assert_eq!(calculate_calories(6000, 70.0, 60, CalorieMethod::Simple, Some(0.0)), 240);
        assert_eq!(calculate_calories(0, 70.0, 60, CalorieMethod::Met, Some(0.05)), 0);
    }

    #[test]
    fn test_stride_estimate() {
        assert_eq!(estimate_stride_length(175), 74);
        assert_eq!(estimate_stride_length(180), 76);
    }

    #[test]
    fn test_pace() {
        assert_eq!(calculate_pace(60, 0.0), 0.0);
        let pace = calculate_pace(50, 5.0);
        assert!((pace - 10.0).abs() < 1e-9);
        assert_eq!(format_pace(pace), "10:00");
        assert_eq!(format_pace(9.5), "9:30");
        assert_eq!(format_pace(0.0), "--:--");
    }
}
