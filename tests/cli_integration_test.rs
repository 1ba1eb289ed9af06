// Integration tests for the eventbus binary
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn eventbus() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_eventbus"));
    command.env("EVENTBUS_CONFIG", "/nonexistent/eventbus.toml");
    command
}

#[test]
fn test_help_lists_options() {
    let output = eventbus().arg("--help").output().expect("Failed to execute eventbus");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("--runners") && stdout.contains("--reloads") && stdout.contains("--log-format"));
}

#[test]
fn test_supervised_run_prints_summary() {
    let output = eventbus()
        .args(["--runners", "2", "--heartbeat-ms", "5", "--run-ms", "30", "--reloads", "1", "--quiet"])
        .output()
        .expect("Failed to execute eventbus");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Generations: 2 | Runners: 4"), "unexpected summary: {}", stdout);
    assert!(stdout.contains("Shutdown"));
}

#[test]
fn test_json_log_file() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("bus.log");

    let output = eventbus()
        .args(["--runners", "1", "--run-ms", "10", "--reloads", "0", "--quiet", "--log-format", "json"])
        .arg("--log-file")
        .arg(&log_path)
        .args(["--log-file-level", "debug"])
        .output()
        .expect("Failed to execute eventbus");
    assert!(output.status.success());

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.lines().all(|line| line.starts_with('{')));
    assert!(log.contains(r#""message":"event: {Startup global}""#), "log was: {}", log);
    assert!(log.contains(r#""message":"event: {Shutdown global}""#));
}

#[test]
fn test_config_file_supplies_demo_settings() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("eventbus.toml");
    fs::write(&config_path, "[demo]\nrunners = 3\nrun-ms = 10\nreloads = 0\nheartbeat-ms = 5\n").unwrap();

    let output = eventbus()
        .arg("--config-file")
        .arg(&config_path)
        .arg("--quiet")
        .output()
        .expect("Failed to execute eventbus");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Generations: 1 | Runners: 3"), "unexpected summary: {}", stdout);
}

#[test]
fn test_rejects_conflicting_flags() {
    let output = eventbus().args(["--verbose", "--quiet"]).output().expect("Failed to execute eventbus");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Conflicting log level flags"));
}
