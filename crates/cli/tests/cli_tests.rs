//! CLI integration tests

use std::process::Command;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kcost-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("cost management report"),
        "Should show app description"
    );
    assert!(stdout.contains("overall"), "Should show overall command");
    assert!(stdout.contains("breakdown"), "Should show breakdown command");
    assert!(stdout.contains("daily"), "Should show daily command");
    assert!(
        stdout.contains("executions"),
        "Should show executions command"
    );
    assert!(stdout.contains("orgs"), "Should show orgs command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kcost-cli", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("kcost"), "Should show binary name");
}

/// Test breakdown subcommand help
#[test]
fn test_breakdown_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kcost-cli", "--", "breakdown", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Breakdown help should succeed");
    assert!(
        stdout.contains("--dimension"),
        "Should show dimension option"
    );
    assert!(stdout.contains("--window"), "Should show window option");
    assert!(stdout.contains("--org"), "Should show org option");
    assert!(
        stdout.contains("execution-type")
            && stdout.contains("top-projects")
            && stdout.contains("user")
            && stdout.contains("organization"),
        "Should list the breakdown dimensions"
    );
}

/// Test daily subcommand help
#[test]
fn test_daily_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kcost-cli", "--", "daily", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Daily help should succeed");
    assert!(stdout.contains("--window"), "Should show window option");
}

/// Test that window values are restricted to the API vocabulary
#[test]
fn test_window_values() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kcost-cli", "--", "overall", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Overall help should succeed");
    assert!(stdout.contains("30d"), "Should show 30d window");
    assert!(stdout.contains("15d"), "Should show 15d window");
    assert!(stdout.contains("lastweek"), "Should show lastweek window");
    assert!(stdout.contains("today"), "Should show today window");
}

/// Test format option
#[test]
fn test_format_option() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kcost-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--format"), "Should show format option");
    assert!(stdout.contains("table"), "Should show table format");
    assert!(stdout.contains("json"), "Should show json format");
}

/// Test api-url option
#[test]
fn test_api_url_option() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kcost-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--api-url"), "Should show api-url option");
    assert!(stdout.contains("KUBECOST_URL"), "Should show env var");
}

/// Test missing required argument error handling
#[test]
fn test_breakdown_requires_dimension() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kcost-cli", "--", "breakdown"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Missing dimension should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("required") || stderr.contains("error"),
        "Should show error about missing argument"
    );
}

/// Test invalid command error handling
#[test]
fn test_invalid_command() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kcost-cli", "--", "invalid-command"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid"),
        "Should show error message"
    );
}
