//! Result record for a single run

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::ErrorSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    #[default]
    Success,
    Failed,
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessStatus::Success => f.write_str("success"),
            ProcessStatus::Failed => f.write_str("failed"),
        }
    }
}

/// Which detection source a failed run is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    #[default]
    None,
    ReturnCode,
    Stderr,
    Stdout,
    LogFile,
}

impl From<ErrorSource> for FailureReason {
    fn from(source: ErrorSource) -> Self {
        match source {
            ErrorSource::ReturnCode => FailureReason::ReturnCode,
            ErrorSource::Stderr => FailureReason::Stderr,
            ErrorSource::Stdout => FailureReason::Stdout,
            ErrorSource::LogFile => FailureReason::LogFile,
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            FailureReason::None => "none",
            FailureReason::ReturnCode => "return_code",
            FailureReason::Stderr => "stderr",
            FailureReason::Stdout => "stdout",
            FailureReason::LogFile => "log_file",
        };
        f.write_str(tag)
    }
}

/// Everything recorded about one run. A fresh record is built for every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessResult {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    /// Log file lines, read after the child exited.
    pub log_file: Vec<String>,
    pub return_code: i32,
    pub pid: u32,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: ProcessStatus,
    pub reason_for_failure: FailureReason,
}

impl ProcessResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self) -> bool {
        self.status == ProcessStatus::Success
    }

    /// Wall-clock time between spawn and exit.
    pub fn runtime(&self) -> Option<Duration> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    pub fn summary(&self) -> String {
        let status = match (self.status, self.reason_for_failure) {
            (ProcessStatus::Success, _) => "SUCCESS".to_string(),
            (ProcessStatus::Failed, FailureReason::None) => "FAILED".to_string(),
            (ProcessStatus::Failed, reason) => format!("FAILED ({reason})"),
        };
        let runtime = self
            .runtime()
            .map(|d| format!("{}ms", d.num_milliseconds()))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "{} - pid {}, return code {}, {}",
            status, self.pid, self.return_code, runtime
        )
    }
}
