use std::process::{Command, Output};

use approx::assert_abs_diff_eq;

const COUNT_MESSAGE: &str =
    "Number of arguments passed is not valid, recheck your command line statement";

fn eci2ecef(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_eci2ecef"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run eci2ecef")
}

fn stdout_values(output: &Output) -> Vec<f64> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.parse().expect("stdout line is not a number"))
        .collect()
}

#[test]
fn test_j2000_prints_three_lines() {
    let output = eci2ecef(&["2000", "1", "1", "12", "0", "0", "6678", "0", "0"]);
    assert!(output.status.success());

    let values = stdout_values(&output);
    assert_eq!(values.len(), 3);
    assert_abs_diff_eq!(values[0], 1300.3508946766183, epsilon = 1e-9);
    assert_abs_diff_eq!(values[1], 6550.1733985226465, epsilon = 1e-9);
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().last(), Some("0.0"));
}

#[test]
fn test_negative_components() {
    let output = eci2ecef(&["1999", "12", "31", "0", "0", "0", "7000", "-1200", "300"]);
    assert!(output.status.success());

    let values = stdout_values(&output);
    assert_abs_diff_eq!(values[0], -2309.961639582622, epsilon = 1e-6);
    assert_abs_diff_eq!(values[1], -6715.956910497324, epsilon = 1e-6);
    assert_eq!(values[2], 300.0);
}

#[test]
fn test_wrong_count_fails_with_message() {
    let output = eci2ecef(&["2000", "1", "1", "12", "0"]);
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), COUNT_MESSAGE);
}

#[test]
fn test_wrong_count_legacy_exits_zero() {
    let output = eci2ecef(&["--legacy", "2000", "1", "1", "12", "0"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), COUNT_MESSAGE);
}

#[test]
fn test_non_numeric_fails_before_output() {
    let output = eci2ecef(&["abc", "1", "1", "12", "0", "0", "6678", "0", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("year"), "stderr: {stderr}");
    assert!(stderr.contains("abc"), "stderr: {stderr}");
}

#[test]
fn test_legacy_matches_older_converter() {
    let output = eci2ecef(&["--legacy", "2000", "1", "1", "12", "0", "0", "6678", "0", "0"]);
    assert!(output.status.success());

    let values = stdout_values(&output);
    assert_abs_diff_eq!(values[0], -2753.6144837814422, epsilon = 1e-6);
    assert_abs_diff_eq!(values[1], -6083.854968250727, epsilon = 1e-6);
    assert_eq!(values[2], 0.0);
}

#[test]
fn test_ron_format() {
    let output = eci2ecef(&[
        "--format", "ron", "2000", "1", "1", "12", "0", "0", "6678", "0", "0",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("r_ecef"));
    assert!(stdout.contains("julian_date"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let output = eci2ecef(&["-vv", "2000", "1", "1", "12", "0", "0", "6678", "0", "0"]);
    assert!(output.status.success());
    assert_eq!(stdout_values(&output).len(), 3);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("gmst"), "stderr: {stderr}");
}
