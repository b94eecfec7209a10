//! Error detection over captured run evidence
//!
//! The detector is a small predicate engine. Each call to
//! [`ErrorDetector::check_for`] tests one sample (a return code or a list of
//! lines) against a list of indicators in one of three modes and records any
//! failures under the tag of the source the sample came from. The detector does
//! no I/O; callers hand it evidence that has already been read.
//!
//! Failures accumulate for the lifetime of the detector. The first recorded
//! failure is never displaced, which is what the runner uses to attribute the
//! failure reason.

mod detector;
mod sample;

#[cfg(test)]
mod tests;

pub use detector::{CheckMode, CheckOptions, ErrorDetector, FailedSample};
pub use sample::{Evidence, Indicators, Sample};
