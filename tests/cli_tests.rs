//! End-to-end tests driving the `creditmanager` binary over stdin

mod common;

use common::creditmanager_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn full_session_adds_grades_and_reports_average() {
    let home = TempDir::new().unwrap();
    creditmanager_cmd(home.path())
        .write_stdin("1\nMickey\n3\nMickey Swift A+\n5\nMickey\nX\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added student Mickey."))
        .stdout(predicate::str::contains("Mickey's Swift grade was set to A+."))
        .stdout(predicate::str::contains("Swift: A+\nAverage: 4.5\n"))
        .stdout(predicate::str::ends_with("Exiting the program...\n"));
}

#[test]
fn duplicate_student_is_reported() {
    let home = TempDir::new().unwrap();
    creditmanager_cmd(home.path())
        .write_stdin("1\nMickey\n1\nMickey\nX\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mickey already exists. Not added."));
}

#[test]
fn unknown_menu_code_keeps_prompting() {
    let home = TempDir::new().unwrap();
    let output = creditmanager_cmd(home.path())
        .write_stdin("6\nX\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert!(stdout.contains("Please enter a number from 1 to 5 or X."));
    assert_eq!(stdout.matches("Please choose a menu option").count(), 2);
}

#[test]
fn windows_line_endings_are_accepted() {
    let home = TempDir::new().unwrap();
    creditmanager_cmd(home.path())
        .write_stdin("1\r\nMickey\r\nX\r\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added student Mickey."));
}

#[test]
fn end_of_input_stops_without_farewell() {
    let home = TempDir::new().unwrap();
    creditmanager_cmd(home.path())
        .write_stdin("1\nMickey\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added student Mickey."))
        .stdout(predicate::str::contains("Exiting the program...").not());
}

#[test]
fn logs_never_reach_stdout() {
    let home = TempDir::new().unwrap();
    creditmanager_cmd(home.path())
        .args(["--log-level", "debug", "--debug"])
        .write_stdin("1\nMickey\nX\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[DEBUG]").not())
        .stdout(predicate::str::contains("[INFO]").not())
        .stderr(predicate::str::contains("[DEBUG] Added student Mickey"));
}

#[test]
fn log_file_receives_tagged_lines() {
    let home = TempDir::new().unwrap();
    let log_path = home.path().join("session.log");
    creditmanager_cmd(home.path())
        .args(["--log-level", "info"])
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("X\n")
        .assert()
        .success();

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("[INFO] Session started"));
}

#[test]
fn config_set_then_get_round_trips_through_file() {
    let home = TempDir::new().unwrap();
    creditmanager_cmd(home.path())
        .args(["config", "set", "show_menu", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set show_menu = false"));

    creditmanager_cmd(home.path())
        .args(["config", "get", "show_menu"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn config_rejects_unknown_key() {
    let home = TempDir::new().unwrap();
    creditmanager_cmd(home.path())
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key: 'colour'"));
}

#[test]
fn show_menu_flag_prints_menu_once() {
    let home = TempDir::new().unwrap();
    let output = creditmanager_cmd(home.path())
        .args(["--show-menu", "false", "run"])
        .write_stdin("1\nMickey\n2\nMickey\nX\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert_eq!(stdout.matches("Please choose a menu option").count(), 1);
    assert!(stdout.contains("Deleted student Mickey."));
}

#[test]
fn run_overrides_are_not_saved_by_config_set() {
    let home = TempDir::new().unwrap();
    creditmanager_cmd(home.path())
        .args(["--show-menu", "false", "--config-verbose", "true"])
        .args(["config", "set", "level", "error"])
        .assert()
        .success();

    creditmanager_cmd(home.path())
        .args(["config", "get", "show_menu"])
        .assert()
        .success()
        .stdout("true\n");
    creditmanager_cmd(home.path())
        .args(["config", "get", "verbose"])
        .assert()
        .success()
        .stdout("false\n");
    creditmanager_cmd(home.path())
        .args(["config", "get", "level"])
        .assert()
        .success()
        .stdout("error\n");
}
