//! Tests for the cmdvet binary

use std::process::Command;

use tempfile::TempDir;

use super::helpers::write_script;

fn cmdvet() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cmdvet"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_success_exits_zero() {
    let output = cmdvet().args(["echo", "--", "hello"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SUCCESS"));
    assert!(stdout.contains("hello"));
}

#[test]
fn cli_classified_failure_exits_one() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "noisy.sh", "echo 'error: broken'");
    let output = cmdvet()
        .arg("sh")
        .args(["--detect-on", "stdout", "--forbidden-word-in-stdout", "error"])
        .arg("--parameter")
        .arg(&script)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FAILED"));
    assert!(stdout.contains("reason: stdout"));
}

#[test]
fn cli_missing_command_exits_two() {
    let output = cmdvet().arg("cmdvet-no-such-command").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn cli_unknown_detection_source_exits_two() {
    let output = cmdvet()
        .args(["echo", "--detect-on", "exit_code"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cli_reads_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("cmdvet.toml");
    std::fs::write(
        &config,
        "parameter = \"configured\"\n\n[error_indicators]\nallowed_return_code = [0]\n",
    )
    .unwrap();

    let output = cmdvet()
        .arg("echo")
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("configured"));
}

#[test]
fn cli_json_output() {
    let output = cmdvet()
        .args(["echo", "--json", "--", "structured"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["reason_for_failure"], "none");
    assert_eq!(value["stdout"][0], "structured");
    assert_eq!(value["return_code"], 0);
}
