//! Result rendering
//!
//! The text form is the single `<number> = <minor> + <major>` line; the JSON
//! form wraps the same result with run metadata.

pub mod json;
pub mod text;

use crate::config::{OutputFormat, ScanMode};
use crate::result::BestResult;
use crate::scan::ScanRange;
use std::time::Duration;

/// Everything known about a finished scan
#[derive(Debug, Clone, Copy)]
pub struct ScanSummary<'a> {
    pub best: &'a BestResult,
    pub range: &'a ScanRange,
    pub mode: ScanMode,
    /// Threads that did the work (1 for a sequential scan)
    pub workers: usize,
    pub elapsed: Duration,
}

/// Render `summary` in the requested format, without a trailing newline
pub fn render(format: OutputFormat, summary: &ScanSummary<'_>) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(text::format_result(summary.best)),
        OutputFormat::Json => json::to_json_string(&json::build_report(summary)),
    }
}
