//! Integration tests for the liftlog binary.
//!
//! These tests verify end-to-end behavior including:
//! - Reading a workout log from disk
//! - Summary, catalog and progression reports (table and JSON)
//! - CSV export
//! - Graceful handling of missing or malformed logs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const STRONG_EXPORT: &str = "\
Date,Workout Name,Duration,Exercise Name,Set Order,Weight,Reps,Distance,Seconds,Notes,Workout Notes,RPE
2024-01-05 08:30:00,Push Day,1h 5m,Bench Press,1,100,5,0,0,,,
2024-01-05 08:30:00,Push Day,1h 5m,Bench Press,2,110,5,0,0,,,
2024-01-05 08:30:00,Push Day,1h 5m,Bench Press,3,90,8,0,0,,,8
2024-01-05 08:30:00,Push Day,1h 5m,Dips,1,0,12,0,0,,,
2024-01-08 18:00:00,Leg Day,55m,Squat,1,140,3,0,0,,,
2024-01-08 18:00:00,Leg Day,55m,Squat,2,140,3,0,0,,,
2024-01-12 08:30:00,Push Day,1h 2m,Bench Press,1,112.5,5,0,0,,,
2024-01-12 08:30:00,Push Day,1h 2m,Bench Press,2,heavy,5,0,0,,,
";

/// Helper to create a test directory holding a workout log
fn setup_log(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("strong.csv");
    fs::write(&log_path, contents).expect("Failed to write log");
    (temp_dir, log_path)
}

/// Helper to get the CLI binary with an isolated config directory
fn cli(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("liftlog"));
    cmd.env("XDG_CONFIG_HOME", temp_dir.path().join("config"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("Failed to run liftlog");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_cli_help() {
    let temp_dir = tempfile::tempdir().unwrap();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout log analyser"));
}

#[test]
fn test_summary_json_values() {
    let (temp_dir, log_path) = setup_log(STRONG_EXPORT);

    let summaries = json_output(
        cli(&temp_dir)
            .arg("summary")
            .arg("--file")
            .arg(&log_path)
            .arg("--json"),
    );

    let summaries = summaries.as_array().unwrap();
    assert_eq!(summaries.len(), 4);

    let bench = &summaries[0];
    assert_eq!(bench["date"], "2024-01-05");
    assert_eq!(bench["workoutName"], "Push Day");
    assert_eq!(bench["exerciseName"], "Bench Press");
    assert_eq!(bench["maxWeight"], 110.0);
    assert_eq!(bench["totalVolume"], 1770.0);
    assert_eq!(bench["avgReps"], 6.0);
    assert_eq!(bench["sets"], 3);

    // the non-numeric weight row still counts as a set with no volume
    let last = &summaries[3];
    assert_eq!(last["date"], "2024-01-12");
    assert_eq!(last["sets"], 2);
    assert_eq!(last["totalVolume"], 562.5);
}

#[test]
fn test_summary_table_filtered_by_exercise() {
    let (temp_dir, log_path) = setup_log(STRONG_EXPORT);

    cli(&temp_dir)
        .arg("summary")
        .arg("--file")
        .arg(&log_path)
        .arg("--exercise")
        .arg("Squat")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jan 08, 2024"))
        .stdout(predicate::str::contains("Squat"))
        .stdout(predicate::str::contains("Bench Press").not());
}

#[test]
fn test_workouts_listed_alphabetically() {
    let (temp_dir, log_path) = setup_log(STRONG_EXPORT);

    let names = json_output(
        cli(&temp_dir)
            .arg("workouts")
            .arg("--file")
            .arg(&log_path)
            .arg("--json"),
    );
    assert_eq!(names, serde_json::json!(["Leg Day", "Push Day"]));
}

#[test]
fn test_exercises_ranked_by_set_count() {
    let (temp_dir, log_path) = setup_log(STRONG_EXPORT);

    let names = json_output(
        cli(&temp_dir)
            .arg("exercises")
            .arg("--file")
            .arg(&log_path)
            .arg("--json"),
    );
    assert_eq!(names, serde_json::json!(["Bench Press", "Squat", "Dips"]));

    cli(&temp_dir)
        .arg("exercises")
        .arg("--file")
        .arg(&log_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 sets  Bench Press"));
}

#[test]
fn test_config_selects_alphabetical_exercises() {
    let (temp_dir, log_path) = setup_log(STRONG_EXPORT);
    let config_path = temp_dir.path().join("liftlog.toml");
    fs::write(&config_path, "[catalog]\nexercise_order = \"alphabetical\"\n").unwrap();

    let names = json_output(
        cli(&temp_dir)
            .arg("exercises")
            .arg("--file")
            .arg(&log_path)
            .arg("--config")
            .arg(&config_path)
            .arg("--json"),
    );
    assert_eq!(names, serde_json::json!(["Bench Press", "Dips", "Squat"]));
}

#[test]
fn test_progression_json() {
    let (temp_dir, log_path) = setup_log(STRONG_EXPORT);

    let series = json_output(
        cli(&temp_dir)
            .arg("progression")
            .arg("Bench Press")
            .arg("--file")
            .arg(&log_path)
            .arg("--json"),
    );

    assert_eq!(series["exerciseName"], "Bench Press");
    let data = series["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["date"], "2024-01-05");
    assert_eq!(data[1]["date"], "2024-01-12");
    assert_eq!(data[1]["maxWeight"], 112.5);
    assert!(data[0].get("workoutName").is_none());
}

#[test]
fn test_progression_unknown_exercise_is_empty() {
    let (temp_dir, log_path) = setup_log(STRONG_EXPORT);

    let series = json_output(
        cli(&temp_dir)
            .arg("progression")
            .arg("NonExistentExercise")
            .arg("--file")
            .arg(&log_path)
            .arg("--json"),
    );
    assert_eq!(
        series,
        serde_json::json!({"exerciseName": "NonExistentExercise", "data": []})
    );

    cli(&temp_dir)
        .arg("progression")
        .arg("bench press")
        .arg("--file")
        .arg(&log_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions found"));
}

#[test]
fn test_progression_table_and_csv() {
    let (temp_dir, log_path) = setup_log(STRONG_EXPORT);
    let csv_path = temp_dir.path().join("out").join("squat.csv");

    cli(&temp_dir)
        .arg("progression")
        .arg("Squat")
        .arg("--file")
        .arg(&log_path)
        .arg("--csv")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Best estimated 1RM: 154"));

    let csv_content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert!(csv_content.starts_with("exerciseName,date,maxWeight"));
    assert!(csv_content.contains("Squat,2024-01-08,140.0,840.0,3.0,2,154"));
}

#[test]
fn test_export_writes_all_sessions() {
    let (temp_dir, log_path) = setup_log(STRONG_EXPORT);
    let out_path = temp_dir.path().join("sessions.csv");

    cli(&temp_dir)
        .arg("export")
        .arg(&out_path)
        .arg("--file")
        .arg(&log_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 sessions"));

    let reader = csv_lines(&out_path);
    assert_eq!(reader.len(), 5);
    assert!(reader[0].starts_with("date,workoutName,exerciseName"));
}

#[test]
fn test_camel_case_headers() {
    let (temp_dir, log_path) = setup_log(
        "date,workoutName,exerciseName,setOrder,weight,reps\n\
         2024-02-01,Legs,Deadlift,1,180,5\n",
    );

    let summaries = json_output(
        cli(&temp_dir)
            .arg("summary")
            .arg("--file")
            .arg(&log_path)
            .arg("--json"),
    );
    assert_eq!(summaries[0]["exerciseName"], "Deadlift");
    assert_eq!(summaries[0]["totalVolume"], 900.0);
}

#[test]
fn test_missing_log_reports_no_data() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("nope.csv");

    cli(&temp_dir)
        .arg("summary")
        .arg("--file")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("No workout data found"));

    let summaries = json_output(
        cli(&temp_dir)
            .arg("summary")
            .arg("--file")
            .arg(&missing)
            .arg("--json"),
    );
    assert_eq!(summaries, serde_json::json!([]));
}

#[test]
fn test_non_tabular_log_reports_no_data() {
    let (temp_dir, log_path) = setup_log("this is not a workout export\n");

    cli(&temp_dir)
        .arg("workouts")
        .arg("--file")
        .arg(&log_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No workout data found"));
}

#[test]
fn test_invalid_config_is_error() {
    let (temp_dir, log_path) = setup_log(STRONG_EXPORT);
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[display]\ndate_format = \"%Q\"\n").unwrap();

    cli(&temp_dir)
        .arg("summary")
        .arg("--file")
        .arg(&log_path)
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure();
}

fn csv_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read CSV")
        .lines()
        .map(String::from)
        .collect()
}
