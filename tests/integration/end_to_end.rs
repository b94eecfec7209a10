//! End-to-end runs through the public API

use cmdvet::{
    Command, CommandOptions, ErrorIndicators, ErrorSource, FailureReason, ProcessStatus,
};
use tempfile::TempDir;

use super::helpers::{sh_command, write_script};

#[test]
fn echo_with_default_config_succeeds() {
    let mut command = Command::new("echo", CommandOptions::new().with_parameter("output")).unwrap();
    let result = command.run().unwrap();

    assert_eq!(result.status, ProcessStatus::Success);
    assert_eq!(result.stdout, vec!["output"]);
    assert_eq!(result.return_code, 0);
}

#[test]
fn exit_one_fails_on_return_code() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "fail.sh", "exit 1");
    let mut command = sh_command(
        &script,
        CommandOptions::new().detect_on([ErrorSource::ReturnCode]),
    );
    let result = command.run().unwrap();

    assert_eq!(result.status, ProcessStatus::Failed);
    assert_eq!(result.reason_for_failure, FailureReason::ReturnCode);
}

#[test]
fn forbidden_word_on_two_stdout_lines() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        "noisy.sh",
        "echo 'error. execution failed'\necho 'error. execution failed'",
    );
    let mut command = sh_command(
        &script,
        CommandOptions::new()
            .detect_on([ErrorSource::Stdout])
            .with_indicators(ErrorIndicators::default().forbid_words(ErrorSource::Stdout, ["error"])),
    );
    let result = command.run().unwrap();

    assert_eq!(result.status, ProcessStatus::Failed);
    assert_eq!(result.reason_for_failure, FailureReason::Stdout);
    assert_eq!(
        result.stdout,
        vec!["error. execution failed", "error. execution failed"]
    );
}

#[test]
fn allowed_word_exempts_only_its_own_line() {
    let temp = TempDir::new().unwrap();
    let options = CommandOptions::new()
        .detect_on([ErrorSource::Stderr])
        .with_indicators(
            ErrorIndicators::default()
                .forbid_words(ErrorSource::Stderr, ["error"])
                .allow_words(ErrorSource::Stderr, ["0 errors"]),
        );

    let clean = write_script(&temp, "clean.sh", "echo 'finished with 0 errors' >&2");
    let mut command = sh_command(&clean, options.clone());
    assert!(command.run().unwrap().success());

    let dirty = write_script(
        &temp,
        "dirty.sh",
        "echo 'finished with 0 errors' >&2\necho 'error: late failure' >&2",
    );
    let mut command = sh_command(&dirty, options);
    assert_eq!(
        command.run().unwrap().reason_for_failure,
        FailureReason::Stderr
    );
}

#[test]
fn allowed_return_codes_from_config_file() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "two.sh", "exit 2");
    let mut options = CommandOptions::from_toml_str(
        r#"
[error_indicators]
allowed_return_code = [0, 2]
"#,
    )
    .unwrap();
    options.working_directory = Some(temp.path().to_path_buf());

    let mut command = sh_command(&script, options);
    let result = command.run().unwrap();
    assert!(result.success());
    assert_eq!(result.return_code, 2);
}

#[test]
fn log_file_written_by_child_is_inspected() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        "logger.sh",
        "echo 'starting' > app.log\necho 'panic: out of memory' >> app.log",
    );
    let mut command = sh_command(
        &script,
        CommandOptions::new()
            .with_working_directory(temp.path())
            .with_log_file("app.log")
            .detect_on([ErrorSource::ReturnCode, ErrorSource::LogFile])
            .with_indicators(
                ErrorIndicators::default().forbid_words(ErrorSource::LogFile, ["panic"]),
            ),
    );
    let result = command.run().unwrap();

    assert_eq!(result.log_file, vec!["starting", "panic: out of memory"]);
    assert_eq!(result.reason_for_failure, FailureReason::LogFile);
}
