//! Timing utilities
//!
//! Wall-clock measurement of a scan plus the formatting used in logs and the
//! JSON report.

use std::time::{Duration, Instant};

/// Start point of a timed section
#[derive(Debug, Clone, Copy)]
pub struct Timestamp {
    instant: Instant,
}

impl Timestamp {
    #[inline]
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.instant.elapsed()
    }
}

/// Format a duration in human-readable form
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use goldbach::util::time::format_duration_human;
///
/// assert_eq!(format_duration_human(Duration::ZERO), "0µs");
/// assert_eq!(format_duration_human(Duration::from_micros(750)), "750µs");
/// assert_eq!(format_duration_human(Duration::from_micros(2500)), "2.500ms");
/// assert_eq!(format_duration_human(Duration::from_secs(5)), "5.000s");
/// assert_eq!(format_duration_human(Duration::from_secs(90)), "1.50m");
/// ```
pub fn format_duration_human(d: Duration) -> String {
    let micros = d.as_micros() as u64;

    if micros == 0 {
        return "0µs".to_string();
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.3}ms", micros as f64 / 1000.0)
    } else if micros < 60_000_000 {
        format!("{:.3}s", micros as f64 / 1_000_000.0)
    } else if micros < 3_600_000_000 {
        format!("{:.2}m", micros as f64 / 60_000_000.0)
    } else {
        format!("{:.2}h", micros as f64 / 3_600_000_000.0)
    }
}

/// Numbers decomposed per second
///
/// Zero when no time has elapsed.
pub fn calculate_rate(numbers: u64, duration: Duration) -> f64 {
    let seconds = duration.as_secs_f64();
    if seconds > 0.0 {
        numbers as f64 / seconds
    } else {
        0.0
    }
}

/// Format a rate (numbers per second)
///
/// # Examples
///
/// ```
/// use goldbach::util::time::format_rate;
///
/// assert_eq!(format_rate(500.0), "500/s");
/// assert_eq!(format_rate(1500.0), "1.50K/s");
/// assert_eq!(format_rate(2_500_000.0), "2.50M/s");
/// ```
pub fn format_rate(rate: f64) -> String {
    if rate < 1_000.0 {
        format!("{:.0}/s", rate)
    } else if rate < 1_000_000.0 {
        format!("{:.2}K/s", rate / 1_000.0)
    } else if rate < 1_000_000_000.0 {
        format!("{:.2}M/s", rate / 1_000_000.0)
    } else {
        format!("{:.2}G/s", rate / 1_000_000_000.0)
    }
}
