//! CLI options interaction tests
//!
//! These tests validate CLI flag handling, exit codes, and the console
//! output of full analysis runs over temporary log files.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Helper function to create a test command
fn create_test_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sla").unwrap();
    cmd.env_remove("LOG_FILES")
        .env_remove("CONFIDENCE_LEVEL")
        .env_remove("CHART_DIR")
        .env_remove("RENDER_CHARTS")
        .env_remove("ENABLE_COLOR");
    cmd
}

/// One well-formed scenario block with four test records
fn sample_log_content() -> String {
    let mut content = String::new();
    for load in [10, 20, 30, 40] {
        content.push_str(&format!("Dense mesh (load test: {})\n", load));
        content.push_str("send time,0,1000000000,2000000000\n");
        content.push_str("# Retransmissions [count],0,1000000000,0\n");
        content.push_str("Packet delay [ns],500000000,250000000,125000000\n");
        content.push_str("Throughput [b/ms],0,0,0\n");
        content.push_str("serial errors,0,1,2\n");
        content.push('\n');
    }
    content
}

/// Helper to materialize a log file in a temp directory
fn create_temp_log(content: &str) -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("run.log");
    fs::write(&log_path, content).unwrap();
    let log_path_str = log_path.to_str().unwrap().to_string();
    (temp_dir, log_path_str)
}

#[test]
fn test_well_formed_log_prints_intervals() {
    let (_dir, log) = create_temp_log(&sample_log_content());

    create_test_cmd()
        .arg(&log)
        .arg("--no-charts")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("95% of the data is within"))
        .stdout(predicate::str::contains(
            "Delay [s] load test: 10  95% of the data is within  (0.125, 0.5)",
        ))
        .stdout(predicate::str::contains("b/s"))
        .stdout(predicate::str::contains(
            "# serial comm. errors  load test: 10 :  [0 1 2]",
        ));
}

#[test]
fn test_all_records_of_block_are_reported() {
    let (_dir, log) = create_temp_log(&sample_log_content());

    let output = create_test_cmd()
        .arg(&log)
        .arg("--no-charts")
        .arg("--no-color")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for load in [10, 20, 30, 40] {
        assert!(
            stdout.contains(&format!("load test: {}", load)),
            "missing record for load {}",
            load
        );
    }
}

#[test]
fn test_malformed_title_is_fatal_parse_error() {
    let mut content = sample_log_content();
    content = content.replacen("Dense mesh (load test: 10)", "Dense mesh without parens", 1);
    let (_dir, log) = create_temp_log(&content);

    create_test_cmd()
        .arg(&log)
        .arg("--no-charts")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Parsing error"));
}

#[test]
fn test_short_block_is_fatal_validation_error() {
    let content = "A (x: 1)\nt,0\nu,1\nv,2\nw,3\n\n";
    let (_dir, log) = create_temp_log(content);

    create_test_cmd()
        .arg(&log)
        .arg("--no-charts")
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_missing_file_is_io_error() {
    create_test_cmd()
        .arg("/nonexistent/path/run.log")
        .arg("--no-charts")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_no_input_files_is_config_error() {
    create_test_cmd()
        .arg("--no-charts")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_conflicting_color_flags() {
    create_test_cmd()
        .arg("run.log")
        .arg("--color")
        .arg("--no-color")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Cannot specify both"));
}

#[test]
fn test_invalid_confidence_rejected() {
    create_test_cmd()
        .arg("run.log")
        .arg("--confidence")
        .arg("1.5")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Confidence"));
}

#[test]
fn test_custom_confidence_changes_reported_mass() {
    let (_dir, log) = create_temp_log(&sample_log_content());

    create_test_cmd()
        .arg(&log)
        .arg("--no-charts")
        .arg("--no-color")
        .arg("--confidence")
        .arg("0.99")
        .assert()
        .success()
        .stdout(predicate::str::contains("99% of the data is within"));
}

#[test]
fn test_verbose_adds_summary_statistics() {
    let (_dir, log) = create_temp_log(&sample_log_content());

    create_test_cmd()
        .arg(&log)
        .arg("--no-charts")
        .arg("--no-color")
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("std_dev="))
        .stdout(predicate::str::contains("scenario block(s)"));
}

#[test]
fn test_debug_logs_file_and_block_progress() {
    let (_dir, log) = create_temp_log(&sample_log_content());

    create_test_cmd()
        .arg(&log)
        .arg("--no-charts")
        .arg("--no-color")
        .arg("--debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("file parsed"))
        .stderr(predicate::str::contains("block analyzed"));
}

#[test]
fn test_help_topic_short_circuits() {
    create_test_cmd()
        .arg("--help-topic")
        .arg("format")
        .assert()
        .success()
        .stdout(predicate::str::contains("INPUT FORMAT"));
}

#[test]
fn test_unknown_help_topic_lists_available() {
    create_test_cmd()
        .arg("--help-topic")
        .arg("nonsense")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown help topic"));
}

#[test]
fn test_multiple_input_files() {
    let (_dir_a, log_a) = create_temp_log(&sample_log_content());
    let (_dir_b, log_b) = create_temp_log(&sample_log_content());

    let output = create_test_cmd()
        .arg(&log_a)
        .arg(&log_b)
        .arg("--no-charts")
        .arg("--no-color")
        .arg("--verbose")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Analyzed 2 file(s)"));
}

#[test]
fn test_log_files_env_variable() {
    let (_dir, log) = create_temp_log(&sample_log_content());

    create_test_cmd()
        .env("LOG_FILES", &log)
        .arg("--no-charts")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("95% of the data is within"));
}
