//! Turning captured evidence into a status and failure reason

use std::collections::BTreeSet;

use crate::config::{ErrorIndicators, ErrorSource};
use crate::detect::{CheckMode, CheckOptions, ErrorDetector, Indicators, Sample};
use crate::process::{FailureReason, ProcessResult, ProcessStatus};

/// Run the detector over every enabled source and record the outcome on
/// `result`. Returns the detector so callers can inspect individual failures.
///
/// For the return code the allow-list check runs before the deny-list check;
/// either one failing attributes the run to `return_code`.
pub fn classify(
    result: &mut ProcessResult,
    sources: &BTreeSet<ErrorSource>,
    indicators: &ErrorIndicators,
) -> ErrorDetector {
    let mut detector = ErrorDetector::new();

    for &source in sources {
        match source {
            ErrorSource::ReturnCode => {
                let code = Sample::Code(result.return_code);
                let options = CheckOptions::tagged(source);

                // An empty allow-list admits no code at all.
                detector.check_for(
                    code,
                    CheckMode::NotContains,
                    Indicators::Codes(&indicators.allowed_return_code),
                    options,
                );
                if !indicators.forbidden_return_code.is_empty() {
                    detector.check_for(
                        code,
                        CheckMode::ContainsAny,
                        Indicators::Codes(&indicators.forbidden_return_code),
                        options,
                    );
                }
            }
            ErrorSource::Stderr | ErrorSource::Stdout | ErrorSource::LogFile => {
                let lines = match source {
                    ErrorSource::Stderr => &result.stderr,
                    ErrorSource::Stdout => &result.stdout,
                    _ => &result.log_file,
                };
                detector.check_for(
                    Sample::Lines(lines),
                    CheckMode::ContainsAnyAsSubstring,
                    Indicators::Words(indicators.forbidden_words(source)),
                    CheckOptions::tagged(source).with_exceptions(indicators.allowed_words(source)),
                );
            }
        }
    }

    match detector.failed_sample() {
        Some(failed) => {
            result.status = ProcessStatus::Failed;
            result.reason_for_failure = FailureReason::from(failed.tag);
        }
        None => {
            result.status = ProcessStatus::Success;
            result.reason_for_failure = FailureReason::None;
        }
    }

    detector
}
