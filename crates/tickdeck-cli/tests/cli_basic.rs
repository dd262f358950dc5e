//! Basic CLI E2E tests.
//!
//! Tests run the built binary with an isolated HOME and verify outputs.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command with `stdin` piped in and return (stdout, stderr, code).
fn run_cli(home: &Path, args: &[&str], stdin: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tickdeck"))
        .args(args)
        .env("HOME", home)
        .env_remove("TICKDECK_ENV")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn event_types(stdout: &str) -> Vec<String> {
    json_lines(stdout)
        .iter()
        .map(|v| v["type"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_countdown_zero_does_not_start() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["countdown", "0", "0"], "");
    assert_eq!(code, 0);
    assert!(stdout.contains("Nothing to count down."));
}

#[test]
fn test_countdown_runs_to_completion() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["countdown", "0", "2", "--json"], "");
    assert_eq!(code, 0);
    assert_eq!(event_types(&stdout), vec!["CountdownStarted", "CountdownFinished"]);
    assert_eq!(json_lines(&stdout)[0]["remaining_secs"], 2);
}

#[test]
fn test_countdown_rejects_out_of_range_minutes() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(home.path(), &["countdown", "75", "0"], "");
    assert_eq!(code, 0);
    assert!(stderr.contains("out of range"));
    assert!(stdout.contains("Nothing to count down."));
}

#[test]
fn test_stopwatch_records_laps() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["stopwatch", "--json"], "l\nl\nq\n");
    assert_eq!(code, 0);
    let types = event_types(&stdout);
    assert_eq!(types.first().map(String::as_str), Some("StopwatchStarted"));
    assert_eq!(types.iter().filter(|t| *t == "LapRecorded").count(), 2);
    assert_eq!(types.last().map(String::as_str), Some("StopwatchPaused"));
}

#[test]
fn test_pomodoro_preset_applies() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["pomodoro", "--preset", "deep", "--paused", "--json"],
        "p\nq\n",
    );
    assert_eq!(code, 0);
    let events = json_lines(&stdout);
    assert_eq!(events[0]["type"], "PomodoroStarted");
    assert_eq!(events[0]["session"], "work");
    assert_eq!(events[0]["time_left_secs"], 90 * 60);
}

#[test]
fn test_pomodoro_rejects_invalid_work() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["pomodoro", "--work", "0"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("work minutes must be 1-120"));
}

#[test]
fn test_config_set_and_get() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "set", "pomodoro.work_minutes", "40"], "");
    assert_eq!(code, 0);
    assert!(stdout.contains("ok"));

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "pomodoro.work_minutes"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "40");
}

#[test]
fn test_config_rejects_out_of_range() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "pomodoro.break_minutes", "61"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("pomodoro.break_minutes"));
}

#[test]
fn test_config_durations_seed_pomodoro() {
    let home = tempfile::tempdir().unwrap();
    run_cli(home.path(), &["config", "set", "pomodoro.work_minutes", "40"], "");
    let (stdout, _, code) = run_cli(home.path(), &["pomodoro", "--paused", "--json"], "p\nq\n");
    assert_eq!(code, 0);
    assert_eq!(json_lines(&stdout)[0]["time_left_secs"], 40 * 60);
}

#[test]
fn test_clock_json() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["clock", "--json"], "");
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(value["greeting"].as_str().unwrap().ends_with(", Paul"));
    assert!(value.get("quote").is_none());
}
