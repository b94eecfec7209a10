//! Enumerated option values

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A source of evidence inspected after a run.
///
/// Variant order is the evaluation order, so a `BTreeSet<ErrorSource>` iterates
/// in the order the runner checks sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ErrorSource {
    ReturnCode,
    Stderr,
    Stdout,
    LogFile,
}

impl ErrorSource {
    pub const ALL: [ErrorSource; 4] = [
        ErrorSource::ReturnCode,
        ErrorSource::Stderr,
        ErrorSource::Stdout,
        ErrorSource::LogFile,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            ErrorSource::ReturnCode => "return_code",
            ErrorSource::Stderr => "stderr",
            ErrorSource::Stdout => "stdout",
            ErrorSource::LogFile => "log_file",
        }
    }
}

impl fmt::Display for ErrorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ErrorSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().trim_start_matches(':');
        ErrorSource::ALL
            .into_iter()
            .find(|source| source.tag() == tag)
            .ok_or_else(|| ConfigError::UnknownSource(s.to_string()))
    }
}

impl TryFrom<String> for ErrorSource {
    type Error = ConfigError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<ErrorSource> for String {
    fn from(source: ErrorSource) -> Self {
        source.tag().to_string()
    }
}

/// What a run does once it has been classified as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OnError {
    /// Record the failure on the process result and return normally.
    #[default]
    Nothing,
    /// Return [`RunError::Failed`](crate::error::RunError::Failed).
    RaiseError,
    /// Return [`RunError::Thrown`](crate::error::RunError::Thrown).
    ThrowError,
}

impl OnError {
    /// Parse a policy name. Unrecognized names mean "do nothing".
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().trim_start_matches(':') {
            "raise_error" | "raise" => OnError::RaiseError,
            "throw_error" | "throw" | "signal" => OnError::ThrowError,
            _ => OnError::Nothing,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            OnError::Nothing => "nothing",
            OnError::RaiseError => "raise_error",
            OnError::ThrowError => "throw_error",
        }
    }
}

impl From<String> for OnError {
    fn from(tag: String) -> Self {
        OnError::from_tag(&tag)
    }
}

impl From<OnError> for String {
    fn from(policy: OnError) -> Self {
        policy.tag().to_string()
    }
}

impl fmt::Display for OnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// How the child process is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunVia {
    /// Spawn the executable directly and capture stdout and stderr.
    #[default]
    Capture,
    /// Hand the command line to the system shell; output is not captured.
    Shell,
}

impl RunVia {
    /// Parse a strategy name. Unrecognized names fall back to [`RunVia::Capture`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().trim_start_matches(':') {
            "shell" | "system" => RunVia::Shell,
            _ => RunVia::Capture,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            RunVia::Capture => "capture",
            RunVia::Shell => "shell",
        }
    }
}

impl From<String> for RunVia {
    fn from(tag: String) -> Self {
        RunVia::from_tag(&tag)
    }
}

impl From<RunVia> for String {
    fn from(via: RunVia) -> Self {
        via.tag().to_string()
    }
}

impl fmt::Display for RunVia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
