//! Error types for command resolution, configuration and runs.
//!
//! Resolution and configuration errors surface at construction time and are
//! never subject to the on-error policy. [`RunError`] is what a run reports
//! back when the policy asks for it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Message carried by policy-driven run failures.
pub const INSPECT_RESULT_HINT: &str =
    "inspect the process result (return code, stderr, stdout, log file) for details";

/// Errors raised while turning a command name into a runnable executable.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Nothing with that name exists on the search path or filesystem.
    #[error("command '{name}' not found")]
    NotFound { name: String },

    /// The resolved path exists but is a directory or other non-file.
    #[error("command '{}' is not a regular file", path.display())]
    NotAFile { path: PathBuf },

    /// The resolved file has no execute permission.
    #[error("command '{}' is not executable", path.display())]
    NotExecutable { path: PathBuf },

    #[error("failed to determine the current directory")]
    CurrentDir(#[source] io::Error),
}

/// Errors loading [`CommandOptions`](crate::config::CommandOptions) from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown error detection source '{0}' (expected return_code, stderr, stdout or log_file)")]
    UnknownSource(String),
}

/// Errors reported by [`Command::run`](crate::command::Command::run).
#[derive(Debug, Error)]
pub enum RunError {
    /// Hard failure requested by the `raise_error` policy.
    #[error("command execution failed: {}", INSPECT_RESULT_HINT)]
    Failed,

    /// Soft failure requested by the `throw_error` policy. Callers that want to
    /// carry on can match it with [`RunError::is_thrown`] and drop it.
    #[error("command execution failed (thrown): {}", INSPECT_RESULT_HINT)]
    Thrown,

    /// The child could not be spawned or waited on.
    #[error("failed to launch '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl RunError {
    pub fn is_thrown(&self) -> bool {
        matches!(self, RunError::Thrown)
    }

    /// Swallow a thrown failure, passing every other error through.
    pub fn catch_thrown(self) -> Result<(), RunError> {
        if self.is_thrown() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Umbrella error for callers that construct and run in one step.
#[derive(Debug, Error)]
pub enum CmdError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Run(#[from] RunError),
}
