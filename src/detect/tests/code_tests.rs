//! Allow-list and deny-list checks

use crate::config::ErrorSource;
use crate::detect::{CheckMode, CheckOptions, ErrorDetector, Evidence, Indicators, Sample};

fn tag() -> CheckOptions<'static> {
    CheckOptions::tagged(ErrorSource::ReturnCode)
}

#[test]
fn test_new_detector_has_no_error() {
    let detector = ErrorDetector::new();
    assert!(!detector.found_error());
    assert!(detector.failed_sample().is_none());
}

#[test]
fn test_not_contains_passes_for_allowed_code() {
    let mut detector = ErrorDetector::new();
    let failed = detector.check_for(
        Sample::Code(0),
        CheckMode::NotContains,
        Indicators::Codes(&[0, 2]),
        tag(),
    );

    assert!(!failed);
    assert!(!detector.found_error());
}

#[test]
fn test_not_contains_fails_for_code_outside_allow_list() {
    let mut detector = ErrorDetector::new();
    let failed = detector.check_for(
        Sample::Code(1),
        CheckMode::NotContains,
        Indicators::Codes(&[0]),
        tag(),
    );

    assert!(failed);
    assert!(detector.found_error());
    let sample = detector.failed_sample().unwrap();
    assert_eq!(sample.tag, ErrorSource::ReturnCode);
    assert_eq!(sample.mode, CheckMode::NotContains);
    assert_eq!(sample.evidence, Evidence::Code(1));
}

#[test]
fn test_contains_any_fails_for_forbidden_code() {
    let mut detector = ErrorDetector::new();
    assert!(detector.check_for(
        Sample::Code(3),
        CheckMode::ContainsAny,
        Indicators::Codes(&[3, 4]),
        tag(),
    ));
    assert!(!detector.check_for(
        Sample::Code(5),
        CheckMode::ContainsAny,
        Indicators::Codes(&[3, 4]),
        tag(),
    ));
    assert_eq!(detector.failed_samples().len(), 1);
}

#[test]
fn test_code_membership_against_words() {
    let mut detector = ErrorDetector::new();
    let words = vec!["0".to_string(), "2".to_string()];
    assert!(!detector.check_for(
        Sample::Code(2),
        CheckMode::NotContains,
        Indicators::Words(&words),
        tag(),
    ));
}

#[test]
fn test_first_failure_is_never_overwritten() {
    let mut detector = ErrorDetector::new();
    detector.check_for(
        Sample::Code(1),
        CheckMode::NotContains,
        Indicators::Codes(&[0]),
        tag(),
    );
    let stdout = vec!["error".to_string()];
    let words = vec!["error".to_string()];
    detector.check_for(
        Sample::Lines(&stdout),
        CheckMode::ContainsAnyAsSubstring,
        Indicators::Words(&words),
        CheckOptions::tagged(ErrorSource::Stdout),
    );

    assert_eq!(detector.failed_samples().len(), 2);
    assert_eq!(
        detector.failed_sample().unwrap().tag,
        ErrorSource::ReturnCode
    );
}

#[test]
fn test_passing_check_after_failure_keeps_found_error() {
    let mut detector = ErrorDetector::new();
    detector.check_for(
        Sample::Code(1),
        CheckMode::NotContains,
        Indicators::Codes(&[0]),
        tag(),
    );
    detector.check_for(
        Sample::Code(0),
        CheckMode::NotContains,
        Indicators::Codes(&[0]),
        tag(),
    );

    assert!(detector.found_error());
}
