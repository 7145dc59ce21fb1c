//! Runs the yardstick binary against a content file in a scratch home directory

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

const CONTENT: &str = r##"{
    "materials": [
        { "id": "57", "name": "#57 Stone", "densityLbPerFt3": 120 },
        { "id": "fill", "name": "Fill Dirt", "densityTonsPerCY": 1.5 }
    ],
    "calculators": { "concrete": { "defaultWastePct": 10 } }
}"##;

fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_yardstick"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_DATA_HOME", home.join(".local/share"))
        .env_remove("YARDSTICK_LOG")
        .output()
        .expect("failed to run yardstick")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_materials_json() {
    let home = tempdir().unwrap();
    let content = home.path().join("content.json");
    std::fs::write(&content, CONTENT).unwrap();

    let output = run(
        home.path(),
        &["materials", "--content", content.to_str().unwrap(), "-f", "json"],
    );
    let json = stdout_json(&output);
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], "57");
    assert_eq!(items[1]["id"], "fill");
}

#[test]
fn test_materials_table_shows_stored_density() {
    let home = tempdir().unwrap();
    let content = home.path().join("content.json");
    std::fs::write(&content, CONTENT).unwrap();

    let output = run(home.path(), &["materials", "--content", content.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("111.11"));
    assert!(stdout.contains("1.5 t/yd³"));
    assert!(stdout.contains("120 lb/ft³"));
}

#[test]
fn test_aggregate_json() {
    let home = tempdir().unwrap();
    let content = home.path().join("content.json");
    std::fs::write(&content, CONTENT).unwrap();

    let output = run(
        home.path(),
        &[
            "aggregate", "--content", content.to_str().unwrap(), "-f", "json",
            "-l", "10", "-w", "10", "-d", "6", "--unit", "in",
        ],
    );
    let json = stdout_json(&output);
    assert_eq!(json["material"]["id"], "57");
    assert_eq!(json["estimate"]["tons"], 3.0);
    assert_eq!(json["estimate"]["tons_with_waste"], 3.3);
    assert_eq!(json["input_complete"], true);
}

#[test]
fn test_concrete_blank_length_is_zero() {
    let home = tempdir().unwrap();
    let content = home.path().join("content.json");
    std::fs::write(&content, CONTENT).unwrap();

    let output = run(
        home.path(),
        &[
            "concrete", "--content", content.to_str().unwrap(), "-f", "json",
            "--length", "", "--width", "10", "--thickness", "4",
        ],
    );
    let json = stdout_json(&output);
    assert_eq!(json["estimate"]["cubic_yards"], 0.0);
    assert_eq!(json["estimate"]["cubic_yards_with_waste"], 0.0);
    assert_eq!(json["input_complete"], false);
}

#[test]
fn test_concrete_table_output() {
    let home = tempdir().unwrap();
    let content = home.path().join("content.json");
    std::fs::write(&content, CONTENT).unwrap();

    let output = run(
        home.path(),
        &[
            "concrete", "--content", content.to_str().unwrap(),
            "-l", "10", "-w", "10", "-t", "4",
        ],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cubic yards:     1.23"));
    assert!(stdout.contains("1.36"));
}

#[test]
fn test_config_set_and_show() {
    let home = tempdir().unwrap();

    let output = run(home.path(), &["config", "--set-aggregate-waste", "7.5", "--show"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration updated"));
    assert!(stdout.contains("Aggregate waste:  7.5%"));

    let output = run(home.path(), &["config", "--set-concrete-waste", "-3"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("non-negative"), "stderr: {}", stderr);

    let output = run(home.path(), &["config", "--show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Concrete waste:   -3"));
}

#[test]
fn test_malformed_content_fails() {
    let home = tempdir().unwrap();
    let content = home.path().join("content.json");
    std::fs::write(&content, "{ not json").unwrap();

    let output = run(home.path(), &["materials", "--content", content.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}
