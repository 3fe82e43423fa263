//! Integration tests for CLI commands

mod common;

use common::{TestData, SAMPLE};
use serde_json::Value;

#[test]
fn test_summary() {
    let data = TestData::new(SAMPLE);
    let out = data.run(&["--today", "2024-01-10", "summary"]).unwrap();

    assert!(out.contains("Today (2024-01-10): 6,000 steps, 100% of 5,000 goal"));
    assert!(out.contains("11,200 steps over 2 days"));
    assert!(out.contains("8.40 km"));
    assert!(out.contains("Current streak: 2 days (best 2)"));
    assert!(out.contains("Awards: 1 of 205 unlocked"));
}

#[test]
fn test_goal_flag_overrides_stored_goal() {
    let data = TestData::new(SAMPLE);
    let out = data.run(&["--today", "2024-01-10", "--goal", "5500", "summary"]).unwrap();

    // 2024-01-09 falls short of 5,500
    assert!(out.contains("Current streak: 1 days (best 1)"));
}

#[test]
fn test_check_reports_new_awards_without_saving() {
    let data = TestData::new(SAMPLE);
    let before = data.contents();

    let out = data.run(&["--today", "2024-01-10", "check"]).unwrap();
    assert!(out.contains("new awards unlocked"));
    assert!(out.contains("Consistency Kickoff"));
    assert!(!out.contains("First Steps ("));
    assert_eq!(data.contents(), before);
}

#[test]
fn test_check_save_is_idempotent() {
    let data = TestData::new(SAMPLE);

    data.run(&["--today", "2024-01-10", "check", "--save"]).unwrap();
    let saved: Value = serde_json::from_str(&data.contents()).unwrap();
    let awards = saved["awards"].as_array().unwrap();
    assert!(awards.iter().any(|a| a["id"] == "streak_2" && a["date"] == "2024-01-10"));
    assert_eq!(awards[0]["id"], "first_entry");
    assert_eq!(saved["settings"]["daily_step_goal"], 5000);

    let out = data.run(&["--today", "2024-01-10", "check"]).unwrap();
    assert_eq!(out, "No new awards.\n");
}

#[test]
fn test_awards_json_includes_reevaluated_unlocks() {
    let data = TestData::new(SAMPLE);
    let out = data.run(&["--today", "2024-01-10", "awards", "--json"]).unwrap();
    let statuses: Vec<Value> = serde_json::from_str(&out).unwrap();

    assert_eq!(statuses.len(), 205);
    let steps_5k = statuses.iter().find(|s| s["id"] == "steps_5k").unwrap();
    assert_eq!(steps_5k["achieved"], true);

    let total_20k = statuses.iter().find(|s| s["id"] == "total_steps_20k").unwrap();
    assert_eq!(total_20k["achieved"], false);
    assert_eq!(total_20k["progress"], 0.56);
}

#[test]
fn test_awards_difficulty_filter() {
    let data = TestData::new(SAMPLE);
    let out = data.run(&["--today", "2024-01-10", "awards", "--difficulty", "hard"]).unwrap();

    assert!(out.starts_with("== Hard ("));
    assert!(!out.contains("== Beginner"));
}

#[test]
fn test_missing_file_is_an_error() {
    let data = TestData::new(SAMPLE);
    std::fs::remove_file(&data.path).unwrap();

    let err = data.run(&["summary"]).unwrap_err();
    assert!(err.to_string().starts_with("reading data file"));
}

#[test]
fn test_invalid_today_is_rejected() {
    let data = TestData::new(SAMPLE);
    assert!(data.run(&["--today", "2024-02-30", "summary"]).is_err());
}
