//! The error detector

use tracing::debug;

use super::sample::{Evidence, Indicators, Sample};
use crate::config::ErrorSource;

/// Predicate applied by [`ErrorDetector::check_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// Fail when the sample is not one of the values (allow-list).
    NotContains,
    /// Fail when the sample is one of the values (deny-list).
    ContainsAny,
    /// Fail for every line that contains one of the values as a substring,
    /// unless that same line also contains one of the exceptions.
    ContainsAnyAsSubstring,
}

/// Per-call settings: the source tag and, for substring checks, the
/// line-level exceptions.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions<'a> {
    pub tag: ErrorSource,
    pub exceptions: &'a [String],
}

impl<'a> CheckOptions<'a> {
    pub fn tagged(tag: ErrorSource) -> Self {
        Self {
            tag,
            exceptions: &[],
        }
    }

    pub fn with_exceptions(mut self, exceptions: &'a [String]) -> Self {
        self.exceptions = exceptions;
        self
    }
}

/// One failed predicate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedSample {
    pub tag: ErrorSource,
    pub mode: CheckMode,
    pub evidence: Evidence,
}

/// Accumulates failures across any number of checks.
#[derive(Debug, Default)]
pub struct ErrorDetector {
    failed_samples: Vec<FailedSample>,
}

impl ErrorDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `sample` against `values` and record any failures under
    /// `options.tag`. Returns true when this call produced a failure.
    pub fn check_for(
        &mut self,
        sample: Sample<'_>,
        mode: CheckMode,
        values: Indicators<'_>,
        options: CheckOptions<'_>,
    ) -> bool {
        let exceptions = Indicators::Words(options.exceptions);
        let before = self.failed_samples.len();

        for item in sample.items() {
            let failed = match mode {
                CheckMode::NotContains => !values.contains(&item),
                CheckMode::ContainsAny => values.contains(&item),
                CheckMode::ContainsAnyAsSubstring => {
                    values.found_in(&item) && !exceptions.found_in(&item)
                }
            };

            if failed {
                debug!(tag = %options.tag, ?mode, evidence = %item, "check failed");
                self.failed_samples.push(FailedSample {
                    tag: options.tag,
                    mode,
                    evidence: item,
                });
            }
        }

        self.failed_samples.len() > before
    }

    pub fn found_error(&self) -> bool {
        !self.failed_samples.is_empty()
    }

    /// The first failure recorded, if any.
    pub fn failed_sample(&self) -> Option<&FailedSample> {
        self.failed_samples.first()
    }

    pub fn failed_samples(&self) -> &[FailedSample] {
        &self.failed_samples
    }
}
