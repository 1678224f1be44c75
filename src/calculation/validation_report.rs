use std::fmt;

use serde::Serializer;

use crate::prelude::*;

/// Outcome of a completeness check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// 0 to 100. Only 100 when every required key is present and non-null.
    pub completeness_score: u8,
    pub missing_metrics: Vec<MetricIssue>,
    /// Zero values. Suspicious, but they do not lower the score.
    pub warnings: Vec<MetricWarning>,
    pub date_range_issues: Vec<DateRangeIssue>,
    pub passed: bool,
}

impl ValidationReport {
    pub fn new(
        completeness_score: u8,
        missing_metrics: Vec<MetricIssue>,
        warnings: Vec<MetricWarning>,
        date_range_issues: Vec<DateRangeIssue>,
    ) -> Self {
        let passed = completeness_score == 100 && date_range_issues.is_empty();

        ValidationReport {
            completeness_score,
            missing_metrics,
            warnings,
            date_range_issues,
            passed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MetricIssue {
    /// Key absent from the document.
    Missing(String),
    /// Key present, value null.
    Null(String),
    UnknownService(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MetricWarning {
    Zero(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DateRangeIssue {
    MissingBounds,
    InvalidFormat(String),
    EndNotAfterStart { start: String, end: String },
    TooShort { hours: f64 },
    NotMonthStart { start: String },
}

impl fmt::Display for MetricIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricIssue::Missing(key) => write!(f, "MISSING: {key}"),
            MetricIssue::Null(key) => write!(f, "NULL: {key} (API returned null)"),
            MetricIssue::UnknownService(tag) => write!(f, "Unknown service: {tag}"),
        }
    }
}

impl fmt::Display for MetricWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricWarning::Zero(key) => write!(f, "ZERO: {key} = 0 (verify this is correct)"),
        }
    }
}

impl fmt::Display for DateRangeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeIssue::MissingBounds => f.write_str("Missing start_date or end_date"),
            DateRangeIssue::InvalidFormat(reason) => write!(f, "Invalid date format: {reason}"),
            DateRangeIssue::EndNotAfterStart { start, end } => {
                write!(f, "End date ({end}) is not after start date ({start})")
            }
            DateRangeIssue::TooShort { hours } => {
                write!(f, "Date range is very short: {hours:.1} hours")
            }
            DateRangeIssue::NotMonthStart { start } => {
                write!(f, "Start date is not first of month: {start}")
            }
        }
    }
}

// Every entry goes out as its human-readable line.
macro_rules! serialize_as_display {
    ($($entry:ty),*) => {
        $(
            impl Serialize for $entry {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }
        )*
    };
}

serialize_as_display!(MetricIssue, MetricWarning, DateRangeIssue);
