//! CLI integration tests for wowo
//!
//! These tests drive the binary through stdin (REPL) and the one-shot `run`
//! command, checking both the printed responses and the task file on disk.

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a command instance for the wowo binary
fn wowo_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("wowo"));
    cmd.env_remove("WOWO_DATA")
        .env_remove("WOWO_CAPACITY")
        .env_remove("WOWO_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// A command pointed at a task file and an (absent) config inside `dir`
fn wowo_in(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = wowo_cmd();
    cmd.current_dir(dir.path())
        .arg("--data")
        .arg(data_file(dir))
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

fn data_file(dir: &TempDir) -> PathBuf {
    dir.path().join("data").join("wowo.txt")
}

fn stored(dir: &TempDir) -> String {
    fs::read_to_string(data_file(dir)).unwrap()
}

// =============================================================================
// REPL Tests
// =============================================================================

#[test]
fn test_repl_greets_and_says_bye() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello! I'm Wowo"))
        .stdout(predicate::str::contains("Bye. Don't forget to do your chores!"));
}

#[test]
fn test_repl_end_to_end() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .write_stdin("todo Read book\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[T] [ ] Read book"));
    assert_eq!(stored(&dir), "T|0|Read book\n");

    wowo_in(&dir)
        .write_stdin("mark 1\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[T] [X] Read book"));
    assert_eq!(stored(&dir), "T|1|Read book\n");

    wowo_in(&dir)
        .write_stdin("delete 1\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Now you have 0 tasks in the list."));
    assert_eq!(stored(&dir), "");
}

#[test]
fn test_repl_all_task_kinds() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .write_stdin(
            "todo Read book\n\
             deadline return book /by 2/12/2019\n\
             event project meeting /from 2024-01-15 /to 2024-01-16\n\
             list\n\
             bye\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [T] [ ] Read book"))
        .stdout(predicate::str::contains("2. [D] [ ] return book (by: Dec 2 2019)"))
        .stdout(predicate::str::contains(
            "3. [E] [ ] project meeting (from: Jan 15 2024 to: Jan 16 2024)",
        ));

    assert_eq!(
        stored(&dir),
        "T|0|Read book\nD|0|return book|2019-12-02\nE|0|project meeting|2024-01-15|2024-01-16\n"
    );
}

#[test]
fn test_repl_recovers_from_errors() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .write_stdin("blah\ntodo\nmark abc\ndeadline buy milk\nmark 3\ntodo still works\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: 'blah'"))
        .stdout(predicate::str::contains("The description cannot be empty"))
        .stdout(predicate::str::contains("'abc' is not a task number"))
        .stdout(predicate::str::contains("is not a date I understand"))
        .stdout(predicate::str::contains("There is no task 3"))
        .stdout(predicate::str::contains("[T] [ ] still works"));

    assert_eq!(stored(&dir), "T|0|still works\n");
}

#[test]
fn test_repl_stops_reading_after_bye() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .write_stdin("todo before\nbye\ntodo after\n")
        .assert()
        .success();

    assert_eq!(stored(&dir), "T|0|before\n");
}

#[test]
fn test_repl_ends_at_end_of_input() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .write_stdin("todo no goodbye")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye.").not());

    assert_eq!(stored(&dir), "T|0|no goodbye\n");
}

#[test]
fn test_repl_find_and_sort() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .write_stdin(
            "todo zebra\n\
             todo Read Book\n\
             deadline library /by 2024-03-01\n\
             find BOOK\n\
             sort\n\
             bye\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("2. [T] [ ] Read Book"))
        .stdout(predicate::str::contains("Sorted by date."));

    assert_eq!(
        stored(&dir),
        "D|0|library|2024-03-01\nT|0|Read Book\nT|0|zebra\n"
    );
}

#[test]
fn test_repl_json_format() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .args(["--format", "json"])
        .write_stdin("todo Read book\nmark 9\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello!").not())
        .stdout(predicate::str::contains(r#""success":true"#))
        .stdout(predicate::str::contains(r#""success":false"#))
        .stdout(predicate::str::contains(r#""exit":true"#));
}

// =============================================================================
// One-shot Tests
// =============================================================================

#[test]
fn test_run_adds_task() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .args(["run", "todo", "Read", "book"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You have 1 tasks"));

    assert_eq!(stored(&dir), "T|0|Read book\n");
}

#[test]
fn test_run_error_exits_non_zero() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .args(["run", "delete", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: There is no task 1"));
}

#[test]
fn test_run_accepts_negative_index() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .args(["run", "mark", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("There is no task -1"));
}

#[test]
fn test_data_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("elsewhere.txt");

    wowo_cmd()
        .current_dir(dir.path())
        .env("WOWO_DATA", &path)
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .args(["run", "todo", "from env"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), "T|0|from env\n");
}

#[test]
fn test_default_data_location() {
    let dir = TempDir::new().unwrap();

    wowo_cmd()
        .current_dir(dir.path())
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .args(["run", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your list is empty"));

    assert!(dir.path().join("data").join("wowo.txt").is_file());
}

// =============================================================================
// Storage Tests
// =============================================================================

#[test]
fn test_corrupt_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(data_file(&dir), "T|1\nT|1|kept\nQ|0|unknown\n").unwrap();

    wowo_in(&dir)
        .args(["run", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning").not())
        .stdout(predicate::str::contains("1. [T] [X] kept"));
}

#[test]
fn test_bad_date_starts_empty_with_warning() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(data_file(&dir), "T|0|kept\nD|0|broken|next week\n").unwrap();

    wowo_in(&dir)
        .args(["run", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Could not load previous data"))
        .stderr(predicate::str::contains("next week"))
        .stdout(predicate::str::contains("Your list is empty"));
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_capacity_flag() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .args(["--capacity", "1"])
        .write_stdin("todo one\ntodo two\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("my memory is limited to 1 tasks"));

    assert_eq!(stored(&dir), "T|0|one\n");
}

#[test]
fn test_zero_capacity_is_rejected() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .args(["--capacity", "0", "run", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity must be at least 1"));
}

#[test]
fn test_config_file_is_used() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        "data_file = \"mine.txt\"\nsort_order = \"name\"\n",
    )
    .unwrap();

    wowo_cmd()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config_path)
        .write_stdin("deadline zebra /by 2024-01-01\ntodo apple\nsort\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by name."));

    assert_eq!(
        fs::read_to_string(dir.path().join("mine.txt")).unwrap(),
        "T|0|apple\nD|0|zebra|2024-01-01\n"
    );
}

#[test]
fn test_malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "capacity = \"lots\"\n").unwrap();

    wowo_in(&dir)
        .args(["run", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_config_show_and_init() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    wowo_in(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("sort_order = \"date\""));

    wowo_in(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote config"));
    assert!(config_path.is_file());

    wowo_in(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();

    wowo_in(&dir)
        .args(["--verbose", "run", "todo", "x"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose]"));
}
