//! Basic CLI E2E tests.
//!
//! Tests invoke the built `mythic` binary with an isolated HOME and verify
//! outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_mythic"))
        .args(args)
        .env("HOME", home)
        .env_remove("MYTHIC_ENV")
        .env_remove("MYTHIC_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(home: &Path, args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_profile_show_on_fresh_home() {
    let home = tempfile::tempdir().unwrap();
    let profile = run_json(home.path(), &["profile", "show"]);
    assert_eq!(profile["level"], 1);
    assert_eq!(profile["karma"], 0);
    assert_eq!(profile["streak_days"], 0);
    assert!(profile["display_name"].is_null());
}

#[test]
fn test_task_add_list_complete() {
    let home = tempfile::tempdir().unwrap();
    let task = run_json(
        home.path(),
        &["task", "add", "Write tests", "--category", "gyana", "--reward", "150"],
    );
    assert_eq!(task["category"], "gyana");
    assert_eq!(task["reward"], 150);
    let id = task["id"].as_str().unwrap().to_string();

    let tasks = run_json(home.path(), &["task", "list"]);
    assert_eq!(tasks.as_array().unwrap().len(), 1);

    let (stdout, stderr, code) = run_cli(home.path(), &["task", "complete", &id]);
    assert_eq!(code, 0, "complete failed: {stderr}");
    assert!(stderr.contains("level 2"));
    let completion: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(completion["progress"]["level"], 2);
    assert_eq!(completion["progress"]["karma"], 50);

    let profile = run_json(home.path(), &["profile", "show"]);
    assert_eq!(profile["level"], 2);
    assert_eq!(profile["karma"], 50);
    assert_eq!(profile["next_level_at"], 400);
    assert_eq!(profile["band"], 300);
    assert_eq!(profile["punya"], 15.0);
    assert_eq!(profile["tasks_completed"], 1);
    assert_eq!(profile["active_tasks"], 0);
}

#[test]
fn test_task_add_rejects_blank_title() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["task", "add", "   "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_task_add_rejects_unknown_category() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["task", "add", "Dance", "--category", "fire"]);
    assert_ne!(code, 0);
}

#[test]
fn test_task_complete_unknown_id() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["task", "complete", "nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("nope"));
}

#[test]
fn test_quest_accept_respects_daily_cap() {
    let home = tempfile::tempdir().unwrap();
    let task = run_json(home.path(), &["quest", "accept", "ojas-workout"]);
    assert_eq!(task["source_quest"], "ojas-workout");

    let (_, stderr, code) = run_cli(home.path(), &["quest", "accept", "ojas-workout"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("daily limit reached"));

    let quests = run_json(home.path(), &["quest", "list", "--category", "ojas"]);
    let workout = quests
        .as_array()
        .unwrap()
        .iter()
        .find(|q| q["id"] == "ojas-workout")
        .unwrap();
    assert_eq!(workout["admission"]["status"], "denied");
}

#[test]
fn test_display_name_set_once() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["profile", "name", "Mira"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (_, _, code) = run_cli(home.path(), &["profile", "name", "Other"]);
    assert_eq!(code, 1);

    let profile = run_json(home.path(), &["profile", "show"]);
    assert_eq!(profile["display_name"], "Mira");
}

#[test]
fn test_boss_and_achievements() {
    let home = tempfile::tempdir().unwrap();
    let boss = run_json(home.path(), &["boss"]);
    assert_eq!(boss["hp_percent"], 100);
    assert_eq!(boss["boss"]["defeated"], false);

    let achievements = run_json(home.path(), &["achievements"]);
    let list = achievements.as_array().unwrap();
    assert!(!list.is_empty());
    assert!(list.iter().all(|a| a["unlocked"] == false));
}

#[test]
fn test_config_get_set() {
    let home = tempfile::tempdir().unwrap();
    let divisor = "progression.currency_divisor";
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", divisor]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "10");

    let (_, _, code) = run_cli(home.path(), &["config", "set", "rewards.free_form_max", "30"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "rewards.free_form_max"]);
    assert_eq!(stdout.trim(), "30");

    let (_, _, code) = run_cli(home.path(), &["config", "set", divisor, "0"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(home.path(), &["config", "get", "no.such.key"]);
    assert_eq!(code, 1);
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join(".config").join("mythic");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "not = [valid").unwrap();

    let profile = run_json(home.path(), &["profile", "show"]);
    assert_eq!(profile["level"], 1);

    let task = run_json(home.path(), &["task", "add", "Still works", "--reward", "20"]);
    assert_eq!(task["reward"], 20);

    let (_, stderr, code) = run_cli(home.path(), &["config", "list"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_reset_wipes_progression() {
    let home = tempfile::tempdir().unwrap();
    run_json(home.path(), &["task", "add", "Temp", "--reward", "5"]);
    let (_, _, code) = run_cli(home.path(), &["reset"]);
    assert_eq!(code, 0);
    let tasks = run_json(home.path(), &["task", "list"]);
    assert!(tasks.as_array().unwrap().is_empty());
}
