//! The `Command` type

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::classify::classify;
use super::log_file::read_log_file;
use super::policy::enforce;
use crate::config::CommandOptions;
use crate::error::{CmdError, ResolveError, RunError};
use crate::process::{strategy_for, CommandLine, ProcessResult, ProcessStatus};
use crate::resolve::resolve;

/// A resolved command, ready to run any number of times.
///
/// Runs are blocking and not meant to overlap; one `Command` is driven by one
/// caller at a time.
#[derive(Debug)]
pub struct Command {
    name: String,
    line: CommandLine,
    working_directory: PathBuf,
    options: CommandOptions,
    result: Option<ProcessResult>,
}

impl Command {
    /// Resolve `name` and fix the working directory.
    ///
    /// Fails if the executable cannot be found, is not a regular file, or is
    /// not executable. The on-error policy does not apply to these errors.
    pub fn new(name: impl Into<String>, options: CommandOptions) -> Result<Self, ResolveError> {
        let name = name.into();
        let path = resolve(&name, &options.search_paths, options.secure_path)?;

        let working_directory = match &options.working_directory {
            Some(dir) => dir.clone(),
            None => env::current_dir().map_err(ResolveError::CurrentDir)?,
        };

        let line = CommandLine::new(path, options.options.clone(), options.parameter.clone());
        debug!(command = %line, dir = %working_directory.display(), "prepared command");

        Ok(Self {
            name,
            line,
            working_directory,
            options,
            result: None,
        })
    }

    /// Construct and run in one step, returning the command for inspection.
    pub fn execute(name: impl Into<String>, options: CommandOptions) -> Result<Self, CmdError> {
        let mut command = Self::new(name, options)?;
        command.run()?;
        Ok(command)
    }

    /// Run the command once and classify the outcome.
    ///
    /// When the run is classified as failed, `raise_error` yields
    /// [`RunError::Failed`] and `throw_error` yields [`RunError::Thrown`]. In
    /// every case the record of the run stays available through
    /// [`Command::result`].
    pub fn run(&mut self) -> Result<&ProcessResult, RunError> {
        let strategy = strategy_for(self.options.run_via);
        debug!(command = %self.line, strategy = strategy.name(), "running command");

        let mut result = ProcessResult::new();
        let execution = match strategy.execute(&self.line, &self.working_directory) {
            Ok(execution) => execution,
            Err(source) => {
                result.status = ProcessStatus::Failed;
                self.result = Some(result);
                return Err(RunError::Spawn {
                    command: self.line.to_string(),
                    source,
                });
            }
        };

        result.stdout = execution.stdout;
        result.stderr = execution.stderr;
        result.pid = execution.pid;
        result.return_code = execution.exit_code;
        result.start_time = Some(execution.started_at);
        result.end_time = Some(execution.finished_at);
        result.log_file = read_log_file(self.options.log_file.as_deref(), &self.working_directory);

        let detector = classify(
            &mut result,
            &self.options.error_detection_on,
            &self.options.error_indicators,
        );

        let outcome = if result.status == ProcessStatus::Failed {
            if let Some(failed) = detector.failed_sample() {
                warn!(
                    command = %self.line,
                    reason = %result.reason_for_failure,
                    evidence = %failed.evidence,
                    "command failed"
                );
            }
            enforce(self.options.on_error_do)
        } else {
            Ok(())
        };
        info!(
            pid = result.pid,
            return_code = result.return_code,
            status = %result.status,
            "command finished"
        );

        let result: &ProcessResult = self.result.insert(result);
        outcome.map(|()| result)
    }

    /// The record of the most recent run.
    pub fn result(&self) -> Option<&ProcessResult> {
        self.result.as_ref()
    }

    /// Take ownership of the most recent run's record.
    pub fn into_result(self) -> Option<ProcessResult> {
        self.result
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.line.path
    }

    pub fn command_line(&self) -> &CommandLine {
        &self.line
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn options(&self) -> &CommandOptions {
        &self.options
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.line, f)
    }
}
