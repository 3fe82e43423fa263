//! Binding tests run under `wasm-pack test --node`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use step_awards_wasm::{aggregate, award_count, check_cumulative};

#[wasm_bindgen_test]
fn aggregate_rejects_malformed_json() {
    let err = aggregate("not json").unwrap_err();
    let message = err.as_string().unwrap();
    assert!(message.starts_with("Parse error"), "{}", message);
}

#[wasm_bindgen_test]
fn check_cumulative_accepts_partial_stats() {
    let json = check_cumulative(r#"{"total_steps":10000}"#, "2024-01-10", "[]").unwrap();
    assert!(json.contains("\"total_steps_10k\""));
}

#[wasm_bindgen_test]
fn award_count_round_trips() {
    let json = award_count(r#"[{"id":"first_entry","date":"2024-01-01"}]"#).unwrap();
    assert_eq!(json, r#"{"unlocked":1,"total":205}"#);
}
