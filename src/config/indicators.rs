//! Allow and deny lists per detection source

use serde::{Deserialize, Serialize};

use super::types::ErrorSource;

/// Configured indicators, one allowed/forbidden pair per source.
///
/// For text sources the allowed words are line-level exceptions: a line that
/// contains a forbidden word is still accepted when it also contains one of
/// the allowed words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ErrorIndicators {
    pub allowed_return_code: Vec<i32>,
    pub forbidden_return_code: Vec<i32>,
    pub allowed_words_in_stderr: Vec<String>,
    pub forbidden_words_in_stderr: Vec<String>,
    pub allowed_words_in_stdout: Vec<String>,
    pub forbidden_words_in_stdout: Vec<String>,
    pub allowed_words_in_log_file: Vec<String>,
    pub forbidden_words_in_log_file: Vec<String>,
}

impl Default for ErrorIndicators {
    fn default() -> Self {
        Self {
            allowed_return_code: vec![0],
            forbidden_return_code: Vec::new(),
            allowed_words_in_stderr: Vec::new(),
            forbidden_words_in_stderr: Vec::new(),
            allowed_words_in_stdout: Vec::new(),
            forbidden_words_in_stdout: Vec::new(),
            allowed_words_in_log_file: Vec::new(),
            forbidden_words_in_log_file: Vec::new(),
        }
    }
}

impl ErrorIndicators {
    /// Forbidden words for a text source. Empty for `ReturnCode`.
    pub fn forbidden_words(&self, source: ErrorSource) -> &[String] {
        match source {
            ErrorSource::ReturnCode => &[],
            ErrorSource::Stderr => &self.forbidden_words_in_stderr,
            ErrorSource::Stdout => &self.forbidden_words_in_stdout,
            ErrorSource::LogFile => &self.forbidden_words_in_log_file,
        }
    }

    /// Allowed (exception) words for a text source. Empty for `ReturnCode`.
    pub fn allowed_words(&self, source: ErrorSource) -> &[String] {
        match source {
            ErrorSource::ReturnCode => &[],
            ErrorSource::Stderr => &self.allowed_words_in_stderr,
            ErrorSource::Stdout => &self.allowed_words_in_stdout,
            ErrorSource::LogFile => &self.allowed_words_in_log_file,
        }
    }

    pub fn forbidden_words_mut(&mut self, source: ErrorSource) -> Option<&mut Vec<String>> {
        match source {
            ErrorSource::ReturnCode => None,
            ErrorSource::Stderr => Some(&mut self.forbidden_words_in_stderr),
            ErrorSource::Stdout => Some(&mut self.forbidden_words_in_stdout),
            ErrorSource::LogFile => Some(&mut self.forbidden_words_in_log_file),
        }
    }

    pub fn allowed_words_mut(&mut self, source: ErrorSource) -> Option<&mut Vec<String>> {
        match source {
            ErrorSource::ReturnCode => None,
            ErrorSource::Stderr => Some(&mut self.allowed_words_in_stderr),
            ErrorSource::Stdout => Some(&mut self.allowed_words_in_stdout),
            ErrorSource::LogFile => Some(&mut self.allowed_words_in_log_file),
        }
    }

    pub fn with_allowed_return_codes(mut self, codes: impl IntoIterator<Item = i32>) -> Self {
        self.allowed_return_code = codes.into_iter().collect();
        self
    }

    pub fn with_forbidden_return_codes(mut self, codes: impl IntoIterator<Item = i32>) -> Self {
        self.forbidden_return_code = codes.into_iter().collect();
        self
    }

    /// Add forbidden words for a text source. Ignored for `ReturnCode`.
    pub fn forbid_words<I, S>(mut self, source: ErrorSource, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(list) = self.forbidden_words_mut(source) {
            list.extend(words.into_iter().map(Into::into));
        }
        self
    }

    /// Add exception words for a text source. Ignored for `ReturnCode`.
    pub fn allow_words<I, S>(mut self, source: ErrorSource, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(list) = self.allowed_words_mut(source) {
            list.extend(words.into_iter().map(Into::into));
        }
        self
    }
}
