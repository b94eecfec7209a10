//! The top-level option set for a command

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::indicators::ErrorIndicators;
use super::types::{ErrorSource, OnError, RunVia};

/// Options for one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandOptions {
    /// Option segment placed between the executable and the parameter.
    pub options: String,
    /// Trailing parameter segment.
    pub parameter: String,
    /// Directory the child runs in. `None` means the current directory at
    /// construction time.
    pub working_directory: Option<PathBuf>,
    /// Log file read after the run for the `log_file` source. Relative paths
    /// are taken relative to the working directory.
    pub log_file: Option<PathBuf>,
    /// Directories searched for a bare command name. Empty means `$PATH`.
    pub search_paths: Vec<PathBuf>,
    /// Strip `.` and `..` segments from the command name before resolving.
    pub secure_path: bool,
    pub error_detection_on: BTreeSet<ErrorSource>,
    pub error_indicators: ErrorIndicators,
    pub on_error_do: OnError,
    pub run_via: RunVia,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            options: String::new(),
            parameter: String::new(),
            working_directory: None,
            log_file: None,
            search_paths: Vec::new(),
            secure_path: false,
            error_detection_on: BTreeSet::from([ErrorSource::ReturnCode]),
            error_indicators: ErrorIndicators::default(),
            on_error_do: OnError::default(),
            run_via: RunVia::default(),
        }
    }
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = options.into();
        self
    }

    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = parameter.into();
        self
    }

    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_secure_path(mut self, secure: bool) -> Self {
        self.secure_path = secure;
        self
    }

    /// Replace the set of detection sources.
    pub fn detect_on(mut self, sources: impl IntoIterator<Item = ErrorSource>) -> Self {
        self.error_detection_on = sources.into_iter().collect();
        self
    }

    pub fn with_indicators(mut self, indicators: ErrorIndicators) -> Self {
        self.error_indicators = indicators;
        self
    }

    pub fn on_error(mut self, policy: OnError) -> Self {
        self.on_error_do = policy;
        self
    }

    pub fn run_via(mut self, via: RunVia) -> Self {
        self.run_via = via;
        self
    }
}
