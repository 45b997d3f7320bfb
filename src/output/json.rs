//! JSON output format
//!
//! Integers are emitted as decimal strings so values beyond 2^53 survive any
//! JSON reader.

use super::ScanSummary;
use crate::result::BestResult;
use crate::util::time::{calculate_rate, format_duration_human, format_rate};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Duration with both microseconds and human-readable format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonDuration {
    pub micros: u64,
    pub human: String,
}

impl JsonDuration {
    pub fn from_duration(d: Duration) -> Self {
        let micros = d.as_micros() as u64;
        let human = format_duration_human(d);
        Self { micros, human }
    }
}

/// Winning decomposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonResult {
    pub number: String,
    pub minor: String,
    pub major: String,
    /// Same text as the plain output line
    pub line: String,
}

impl From<&BestResult> for JsonResult {
    fn from(best: &BestResult) -> Self {
        Self {
            number: best.number.to_string(),
            minor: best.minor.to_string(),
            major: best.major.to_string(),
            line: best.to_string(),
        }
    }
}

/// Scanned bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRange {
    pub lower: String,
    pub upper: String,
}

/// Complete report for one scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub result: JsonResult,
    pub range: JsonRange,
    pub mode: String,
    pub workers: usize,
    pub numbers_scanned: String,
    pub elapsed: JsonDuration,
    pub rate: String,
    /// RFC 3339, UTC
    pub timestamp: String,
}

/// Build the report for a finished scan
pub fn build_report(summary: &ScanSummary<'_>) -> JsonReport {
    let scanned = summary.range.count();
    let rate = calculate_rate(scanned.to_u64().unwrap_or(u64::MAX), summary.elapsed);

    JsonReport {
        result: JsonResult::from(summary.best),
        range: JsonRange {
            lower: summary.range.lower().to_string(),
            upper: summary.range.upper().to_string(),
        },
        mode: summary.mode.to_string(),
        workers: summary.workers,
        numbers_scanned: scanned.to_string(),
        elapsed: JsonDuration::from_duration(summary.elapsed),
        rate: format_rate(rate),
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
    }
}

/// Pretty-printed JSON document
pub fn to_json_string(report: &JsonReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
