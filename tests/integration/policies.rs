//! On-error policies seen from a caller

use cmdvet::{CmdError, Command, CommandOptions, OnError, ProcessStatus, RunError};
use tempfile::TempDir;

use super::helpers::{sh_command, write_script};

fn run_and_propagate(command: &mut Command) -> Result<(), RunError> {
    command.run()?;
    Ok(())
}

#[test]
fn raise_error_aborts_run() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "fail.sh", "exit 1");
    let mut command = sh_command(&script, CommandOptions::new().on_error(OnError::RaiseError));

    let err = command.run().unwrap_err();
    assert!(matches!(err, RunError::Failed));
    assert_eq!(command.result().unwrap().status, ProcessStatus::Failed);
}

#[test]
fn throw_error_propagates_unless_caught() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "fail.sh", "exit 1");
    let mut command = sh_command(&script, CommandOptions::new().on_error(OnError::ThrowError));

    let err = run_and_propagate(&mut command).unwrap_err();
    assert!(err.is_thrown());

    let caught = run_and_propagate(&mut command).or_else(RunError::catch_thrown);
    assert!(caught.is_ok());
}

#[test]
fn nothing_policy_returns_normally() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "fail.sh", "exit 1");
    let mut command = sh_command(&script, CommandOptions::new());

    let result = command.run().unwrap();
    assert_eq!(result.status, ProcessStatus::Failed);
}

#[test]
fn execute_surfaces_resolution_errors_regardless_of_policy() {
    let err = Command::execute(
        "cmdvet-missing-binary",
        CommandOptions::new().on_error(OnError::Nothing),
    )
    .unwrap_err();
    assert!(matches!(err, CmdError::Resolve(_)));
}

#[test]
fn execute_surfaces_raised_failure() {
    let err = Command::execute("false", CommandOptions::new().on_error(OnError::RaiseError))
        .unwrap_err();
    assert!(matches!(err, CmdError::Run(RunError::Failed)));
}
