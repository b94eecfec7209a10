//! Samples and indicator lists handed to the detector

use std::borrow::Cow;
use std::fmt;

/// Evidence drawn from one detection source.
#[derive(Debug, Clone, Copy)]
pub enum Sample<'a> {
    Code(i32),
    Lines(&'a [String]),
}

impl<'a> Sample<'a> {
    /// Individual items the predicates are applied to: the code itself, or
    /// each line in order.
    pub(crate) fn items(self) -> Vec<Evidence> {
        match self {
            Sample::Code(code) => vec![Evidence::Code(code)],
            Sample::Lines(lines) => lines.iter().cloned().map(Evidence::Line).collect(),
        }
    }
}

/// Values a sample is compared against.
#[derive(Debug, Clone, Copy)]
pub enum Indicators<'a> {
    Codes(&'a [i32]),
    Words(&'a [String]),
}

impl Indicators<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            Indicators::Codes(codes) => codes.is_empty(),
            Indicators::Words(words) => words.is_empty(),
        }
    }

    /// Exact membership. Codes and lines compare through their decimal text
    /// when the kinds differ.
    pub(crate) fn contains(&self, item: &Evidence) -> bool {
        match (self, item) {
            (Indicators::Codes(codes), Evidence::Code(code)) => codes.contains(code),
            (Indicators::Codes(codes), Evidence::Line(line)) => line
                .trim()
                .parse::<i32>()
                .is_ok_and(|code| codes.contains(&code)),
            (Indicators::Words(words), item) => {
                let text = item.text();
                words.iter().any(|word| word.trim() == text.trim())
            }
        }
    }

    /// Whether any indicator occurs as a substring of the item. Empty words
    /// never match.
    pub(crate) fn found_in(&self, item: &Evidence) -> bool {
        let text = item.text();
        match self {
            Indicators::Codes(codes) => codes
                .iter()
                .any(|code| text.contains(code.to_string().as_str())),
            Indicators::Words(words) => words
                .iter()
                .any(|word| !word.is_empty() && text.contains(word.as_str())),
        }
    }
}

/// The specific value that caused a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    Code(i32),
    Line(String),
}

impl Evidence {
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Evidence::Code(code) => Cow::Owned(code.to_string()),
            Evidence::Line(line) => Cow::Borrowed(line),
        }
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evidence::Code(code) => write!(f, "{code}"),
            Evidence::Line(line) => write!(f, "{line:?}"),
        }
    }
}
