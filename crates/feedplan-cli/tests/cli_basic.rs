//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway data directory and
//! verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return output.
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_feedplan-cli"))
        .env("FEEDPLAN_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn run_json(data_dir: &Path, args: &[&str]) -> serde_json::Value {
    let (code, stdout, stderr) = run_cli(data_dir, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_totals_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["totals"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("480.0 kcal"), "{stdout}");
    assert!(stdout.contains("Feedings per day:          7.1"), "{stdout}");
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_totals_json() {
    let dir = tempfile::tempdir().unwrap();
    let totals = run_json(dir.path(), &["totals", "--json"]);
    assert_eq!(totals["daily_calorie_goal"], 480.0);
    assert!(totals["warning"].is_null());
}

#[test]
fn test_config_set_and_get() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "feeding.current_weight_kg", "5"]);
    assert_eq!(code, 0);
    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "feeding.current_weight_kg"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "5.0");

    let totals = run_json(dir.path(), &["totals", "--json"]);
    assert_eq!(totals["daily_calorie_goal"], 600.0);
}

#[test]
fn test_config_rejects_bad_values() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["config", "set", "feeding.feeding_size_ml", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.starts_with("error:"), "{stderr}");
    let (code, _, _) = run_cli(dir.path(), &["config", "get", "feeding.nope"]);
    assert_ne!(code, 0);
}

#[test]
fn test_log_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["log", "add", "6:00 AM", "90"]);
    assert_eq!(code, 0);
    let (code, _, _) = run_cli(dir.path(), &["log", "add", "9 AM", "80", "--pending"]);
    assert_eq!(code, 0);

    let log = run_json(dir.path(), &["log", "list", "--json"]);
    assert_eq!(log.as_array().unwrap().len(), 2);
    assert_eq!(log[1]["completed"], false);

    let (code, _, _) = run_cli(dir.path(), &["log", "complete", "1"]);
    assert_eq!(code, 0);
    let progress = run_json(dir.path(), &["progress", "--json"]);
    assert_eq!(progress["consumed_ml"], 170.0);

    let (code, _, _) = run_cli(dir.path(), &["log", "remove", "0"]);
    assert_eq!(code, 0);
    let (code, _, stderr) = run_cli(dir.path(), &["log", "remove", "5"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("No feed at position 5"), "{stderr}");
}

#[test]
fn test_sample_progress() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["log", "reset", "--sample"]);
    assert_eq!(code, 0);
    let progress = run_json(dir.path(), &["progress", "--json"]);
    assert_eq!(progress["consumed_calories"], 5.625);
    assert_eq!(progress["remaining_calories"], 474.375);
}

#[test]
fn test_plan_at_explicit_time() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["log", "reset", "--sample"]);
    let (code, stdout, _) = run_cli(dir.path(), &["plan", "--at", "9:30 AM"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("10:00 AM"), "{stdout}");
    assert!(stdout.contains("Starting from after 09:00 AM"), "{stdout}");

    let projection = run_json(dir.path(), &["plan", "--at", "23:30", "--json"]);
    assert_eq!(projection["outcome"], "TIME_EXHAUSTED");
    assert!(projection["slots"].as_array().unwrap().is_empty());
}

#[test]
fn test_plan_rejects_bad_time() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["plan", "--at", "teatime"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("cannot parse time"), "{stderr}");
}

#[test]
fn test_summary_json_has_all_sections() {
    let dir = tempfile::tempdir().unwrap();
    let summary = run_json(dir.path(), &["summary", "--at", "12:00", "--json"]);
    for section in ["totals", "progress", "projection"] {
        assert!(summary.get(section).is_some(), "missing {section}");
    }
}
