//! Step Awards WASM Module
//!
//! Browser bindings for the tracker core. Structured values cross the
//! boundary as JSON strings; dates are ISO `YYYY-MM-DD` strings. Errors come
//! back as a rejected `JsValue` carrying the message.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use step_awards_shared::calculations;
use step_awards_shared::streaks;
use step_awards_shared::{
    parse_date, AggregateStats, AwardEvaluator, Entry, Settings, TrackerData, TrackerError, UnlockLedger,
    UnlockRecord,
};

/// Unlock result handed back to the page: the new ids plus the full
/// record list it should persist
#[derive(Debug, Serialize)]
struct UnlockOutcome {
    newly_unlocked: Vec<&'static str>,
    awards: Vec<UnlockRecord>,
}

fn from_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, TrackerError> {
    serde_json::from_str(json).map_err(|e| TrackerError::Parse(e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, TrackerError> {
    serde_json::to_string(value).map_err(|e| TrackerError::Parse(e.to_string()))
}

fn to_js(err: TrackerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn outcome(newly_unlocked: Vec<&'static str>, ledger: UnlockLedger) -> Result<String, TrackerError> {
    to_json(&UnlockOutcome {
        newly_unlocked,
        awards: ledger.into_records(),
    })
}

// ============================================================================
// Statistics
// ============================================================================

fn aggregate_json(entries_json: &str) -> Result<String, TrackerError> {
    let entries: Vec<Entry> = from_json(entries_json)?;
    to_json(&calculations::aggregate(&entries))
}

/// Totals and averages for a JSON array of entries
#[wasm_bindgen]
pub fn aggregate(entries_json: &str) -> Result<String, JsValue> {
    aggregate_json(entries_json).map_err(to_js)
}

fn current_streak_json(entries_json: &str, goal: u32, include_weekends: bool, today: &str) -> Result<u32, TrackerError> {
    let entries: Vec<Entry> = from_json(entries_json)?;
    Ok(streaks::current_streak_on(&entries, goal, include_weekends, parse_date(today)?))
}

/// Current goal streak as of `today`
#[wasm_bindgen]
pub fn current_streak(entries_json: &str, goal: u32, include_weekends: bool, today: &str) -> Result<u32, JsValue> {
    current_streak_json(entries_json, goal, include_weekends, today).map_err(to_js)
}

fn best_streak_json(entries_json: &str, goal: u32, include_weekends: bool) -> Result<u32, TrackerError> {
    let entries: Vec<Entry> = from_json(entries_json)?;
    Ok(streaks::best_streak(&entries, goal, include_weekends))
}

/// Longest goal streak in the history
#[wasm_bindgen]
pub fn best_streak(entries_json: &str, goal: u32, include_weekends: bool) -> Result<u32, JsValue> {
    best_streak_json(entries_json, goal, include_weekends).map_err(to_js)
}

/// Distance in km for a step count and stride
#[wasm_bindgen]
pub fn calculate_distance(steps: u32, stride_length_cm: u32) -> f64 {
    calculations::calculate_distance(steps, stride_length_cm)
}

/// Pace as `M:SS` per km
#[wasm_bindgen]
pub fn format_pace(time_minutes: u32, distance_km: f64) -> String {
    calculations::format_pace(calculations::calculate_pace(time_minutes, distance_km))
}

// ============================================================================
// Awards
// ============================================================================

fn check_entry_json(entry_json: &str, settings_json: &str, unlocked_json: &str) -> Result<String, TrackerError> {
    let entry: Entry = from_json(entry_json)?;
    let settings: Settings = from_json(settings_json)?;
    let mut ledger = UnlockLedger::from_records(from_json::<Vec<UnlockRecord>>(unlocked_json)?);

    let ids = AwardEvaluator::default().check_entry(&entry, &settings, &mut ledger);
    outcome(ids, ledger)
}

/// Unlock the entry awards a newly logged day earns
#[wasm_bindgen]
pub fn check_entry(entry_json: &str, settings_json: &str, unlocked_json: &str) -> Result<String, JsValue> {
    check_entry_json(entry_json, settings_json, unlocked_json).map_err(to_js)
}

fn check_streak_json(streak: u32, today: &str, unlocked_json: &str) -> Result<String, TrackerError> {
    let today = parse_date(today)?;
    let mut ledger = UnlockLedger::from_records(from_json::<Vec<UnlockRecord>>(unlocked_json)?);

    let ids = AwardEvaluator::default().check_streak(streak, today, &mut ledger);
    outcome(ids, ledger)
}

/// Unlock the streak awards a streak length reaches
#[wasm_bindgen]
pub fn check_streak(streak: u32, today: &str, unlocked_json: &str) -> Result<String, JsValue> {
    check_streak_json(streak, today, unlocked_json).map_err(to_js)
}

fn check_cumulative_json(stats_json: &str, today: &str, unlocked_json: &str) -> Result<String, TrackerError> {
    let stats: AggregateStats = from_json(stats_json)?;
    let today = parse_date(today)?;
    let mut ledger = UnlockLedger::from_records(from_json::<Vec<UnlockRecord>>(unlocked_json)?);

    let ids = AwardEvaluator::default().check_cumulative(&stats, today, &mut ledger);
    outcome(ids, ledger)
}

/// Unlock the cumulative awards lifetime totals reach
#[wasm_bindgen]
pub fn check_cumulative(stats_json: &str, today: &str, unlocked_json: &str) -> Result<String, JsValue> {
    check_cumulative_json(stats_json, today, unlocked_json).map_err(to_js)
}

fn evaluate_history_json(data_json: &str, today: &str) -> Result<String, TrackerError> {
    let data = TrackerData::from_json(data_json)?;
    let today = parse_date(today)?;
    let mut ledger = UnlockLedger::from_records(data.awards);

    let report = AwardEvaluator::default().evaluate_history(&data.entries, &data.settings, today, &mut ledger);
    outcome(report.all(), ledger)
}

/// Re-run every award check over an exported data document
#[wasm_bindgen]
pub fn evaluate_history(data_json: &str, today: &str) -> Result<String, JsValue> {
    evaluate_history_json(data_json, today).map_err(to_js)
}

fn award_status_json(unlocked_json: &str, stats_json: Option<String>) -> Result<String, TrackerError> {
    let unlocked: Vec<UnlockRecord> = from_json(unlocked_json)?;
    let stats: Option<AggregateStats> = stats_json.as_deref().map(from_json::<AggregateStats>).transpose()?;

    to_json(&AwardEvaluator::default().status_for_all(&unlocked, stats.as_ref()))
}

/// Every award with its unlock state and, given stats, progress
#[wasm_bindgen]
pub fn award_status(unlocked_json: &str, stats_json: Option<String>) -> Result<String, JsValue> {
    award_status_json(unlocked_json, stats_json).map_err(to_js)
}

fn award_count_json(unlocked_json: &str) -> Result<String, TrackerError> {
    let unlocked: Vec<UnlockRecord> = from_json(unlocked_json)?;
    to_json(&AwardEvaluator::default().count(&unlocked))
}

/// `{unlocked, total}` award counts
#[wasm_bindgen]
pub fn award_count(unlocked_json: &str) -> Result<String, JsValue> {
    award_count_json(unlocked_json).map_err(to_js)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_aggregate_json() {
        let json = aggregate_json(r#"[{"date":"2024-01-01","steps":1000},{"date":"2024-01-02","steps":3000}]"#).unwrap();
        let stats: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(stats["total_steps"], 4000);
        assert_eq!(stats["average_steps"], 2000);
        assert_eq!(stats["best_day"]["date"], "2024-01-02");
    }

    #[test]
    fn test_streak_bindings() {
        let entries = r#"[{"date":"2024-01-09","steps":6000},{"date":"2024-01-10","steps":6000}]"#;
        assert_eq!(current_streak_json(entries, 5000, true, "2024-01-10"), Ok(2));
        assert_eq!(best_streak_json(entries, 5000, true), Ok(2));
        assert!(current_streak_json(entries, 5000, true, "not-a-date").is_err());
    }

    #[test]
    fn test_check_entry_json() {
        let json = check_entry_json(
            r#"{"date":"2024-01-01","steps":1200,"time_minutes":15,"distance_km":0.9,"calories":48}"#,
            "{}",
            r#"[{"id":"first_entry","date":"2023-12-01","viewed":true}]"#,
        )
        .unwrap();
        let out: Value = serde_json::from_str(&json).unwrap();
        let ids: Vec<&str> = out["newly_unlocked"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();

        assert!(ids.contains(&"steps_1k"));
        assert!(!ids.contains(&"first_entry"));
        assert_eq!(out["awards"][0]["date"], "2023-12-01");
        assert_eq!(out["awards"].as_array().unwrap().len(), ids.len() + 1);
    }

    #[test]
    fn test_check_streak_and_cumulative_json() {
        let json = check_streak_json(3, "2024-01-10", "[]").unwrap();
        let out: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(out["newly_unlocked"], serde_json::json!(["streak_2", "streak_3"]));

        let json = check_cumulative_json(r#"{"total_steps":10000,"total_distance_km":0.0,"total_calories":0,"total_time_minutes":0,"average_steps":0,"days_count":1,"best_day":null}"#, "2024-01-10", "[]").unwrap();
        let out: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(out["newly_unlocked"].as_array().unwrap().last().unwrap(), "total_steps_10k");
    }

    #[test]
    fn test_partial_stats_json() {
        let json = check_cumulative_json(r#"{"total_steps":10000}"#, "2024-01-10", "[]").unwrap();
        let out: Value = serde_json::from_str(&json).unwrap();
        assert!(out["newly_unlocked"].as_array().unwrap().iter().any(|v| v == "total_steps_10k"));

        let json = award_status_json("[]", Some(r#"{"total_steps":5000}"#.to_string())).unwrap();
        let statuses: Value = serde_json::from_str(&json).unwrap();
        let ten_k = statuses.as_array().unwrap().iter().find(|s| s["id"] == "total_steps_10k").unwrap();
        assert_eq!(ten_k["progress"], 0.5);
    }

    #[test]
    fn test_evaluate_history_json() {
        let data = r#"{"settings":{"daily_step_goal":1000,"include_weekends":true},"entries":[{"date":"2024-01-09","steps":1200},{"date":"2024-01-10","steps":1500}],"awards":[]}"#;
        let json = evaluate_history_json(data, "2024-01-10").unwrap();
        let out: Value = serde_json::from_str(&json).unwrap();
        let ids = out["newly_unlocked"].as_array().unwrap();

        assert!(ids.iter().any(|v| v == "first_entry"));
        assert!(ids.iter().any(|v| v == "streak_2"));
        assert_eq!(out["awards"].as_array().unwrap().len(), ids.len());
    }

    #[test]
    fn test_award_status_and_count_json() {
        let json = award_status_json("[]", None).unwrap();
        let statuses: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(statuses.as_array().unwrap().len(), 205);
        assert_eq!(statuses[0]["id"], "first_entry");
        assert_eq!(statuses[0]["difficulty"], "beginner");

        let json = award_count_json(r#"[{"id":"first_entry","date":"2024-01-01"}]"#).unwrap();
        assert_eq!(json, r#"{"unlocked":1,"total":205}"#);
    }

    #[test]
    fn test_parse_errors_are_reported() {
        assert!(matches!(aggregate_json("not json"), Err(TrackerError::Parse(_))));
        assert!(matches!(check_streak_json(1, "2024-13-01", "[]"), Err(TrackerError::InvalidDate(_))));
    }

    #[test]
    fn test_derived_values() {
        assert!((calculate_distance(10_000, 75) - 7.5).abs() < 1e-9);
        assert_eq!(format_pace(50, 5.0), "10:00");
        assert_eq!(format_pace(50, 0.0), "--:--");
    }
}
