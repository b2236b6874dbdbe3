//! `dlb show` integration tests (local sources only)

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serial_test::serial;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn records_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": 1, "name": "Apple", "color": "red"}},
            {{"id": 2, "name": "Banana", "color": "yellow"}},
            {{"id": 3, "name": "cherry", "color": "red"}}
        ]"#
    )
    .unwrap();
    file
}

fn dlb() -> Command {
    let mut cmd = Command::cargo_bin("dlb").unwrap();
    cmd.env_remove("DLB_CONFIG");
    cmd
}

#[test]
fn test_show_records_with_preselection() {
    let file = records_file();

    dlb()
        .args(["show", "--source-uri"])
        .arg(file.path())
        .args(["--selected", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Example - showing 2"))
        .stdout(predicate::str::contains("Selected Example - showing 1"));
}

#[test]
fn test_show_json_with_filter_and_composite_text() {
    let file = records_file();

    let output = dlb()
        .args(["show", "--json", "--text-field", "name:color", "--filter-available", "^c"])
        .arg("--source-uri")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["available"]["showing"], 1);
    assert_eq!(parsed["available"]["items"][0]["text"], "cherry red");
}

#[test]
fn test_show_select_control_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"name": "fruits", "options": [{{"value": "a", "text": "Apple", "selected": true}}]}}"#
    )
    .unwrap();

    let output = dlb()
        .args(["show", "--json", "--use-remote-source", "false", "--source-uri"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["submission"]["name"], "fruits");
    assert_eq!(parsed["submission"]["values"][0], "a");
}

#[test]
#[serial]
fn test_show_reads_config_from_env() {
    let file = records_file();
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "title = \"Fruits\"").unwrap();

    dlb()
        .env("DLB_CONFIG", config.path())
        .args(["show", "--source-uri"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Fruits - showing 3"));
}

#[test]
fn test_show_invalid_config_value_fails() {
    let file = records_file();

    dlb()
        .args(["show", "--text-field", "name::color", "--source-uri"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("text-field"))
        .stderr(predicate::str::contains("hint: check --config"));
}

#[test]
fn test_show_missing_source_fails() {
    let dir = tempfile::tempdir().unwrap();

    dlb()
        .args(["show", "--source-uri"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_show_duplicate_values_fail() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"[{{"id": 1, "name": "A"}}, {{"id": 1, "name": "B"}}]"#).unwrap();

    dlb()
        .args(["show", "--source-uri"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate item value: 1"));
}
