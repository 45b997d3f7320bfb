//! End-to-end run of one scan: validate, configure, scan, render
//!
//! The binary only adds logging setup, printing and the exit status. Input
//! rejections come back as [`InputValidationError`] inside the `anyhow`
//! error so the caller can print [`rejection_message`] and exit with 1.

use crate::config::cli::{Cli, USAGE};
use crate::config::toml::{load_config, merge_cli_with_config};
use crate::config::validator::{validate_args, validate_config};
use crate::config::{Config, ScanMode};
use crate::output::{render, ScanSummary};
use crate::scan::{parallel::ParallelScanner, sequential, ScanRange};
use crate::util::resource::physical_cores;
use crate::util::time::{calculate_rate, format_duration_human, format_rate, Timestamp};
use crate::{BestResult, Decomposer, GoldbachError, InputValidationError};
use anyhow::{Context, Result};
use num_traits::ToPrimitive;
use std::time::Duration;
use tracing::{debug, info};

/// Run the scan described by `cli` and return the rendered output
///
/// Bounds are validated before the config file is read, so a wrong argument
/// count is reported even when the file is broken.
pub fn run(cli: &Cli) -> Result<String> {
    let range = validate_args(&cli.bounds)?;

    let config = load_config(cli)?;
    let config = merge_cli_with_config(cli, config);
    validate_config(&config)?;

    let (best, workers, elapsed) = run_scan(&range, &config)?;

    let summary = ScanSummary {
        best: &best,
        range: &range,
        mode: config.scan.mode,
        workers,
        elapsed,
    };
    render(config.output.format, &summary).context("Failed to render result")
}

/// Reason followed by the usage text, as written to stderr on rejection
pub fn rejection_message(error: &InputValidationError) -> String {
    format!("{}\n{}", error, USAGE)
}

/// Run the configured scanner, returning the result, worker count and duration
fn run_scan(range: &ScanRange, config: &Config) -> Result<(BestResult, usize, Duration)> {
    let decomposer = Decomposer::new(config.primality);
    let workers = match config.scan.mode {
        ScanMode::Sequential => 1,
        ScanMode::Parallel => config.scan.resolved_workers(),
    };

    debug!(
        primality = %config.primality,
        chunk_size = config.scan.chunk_size,
        physical_cores = physical_cores(),
        format = %config.output.format,
        "configuration"
    );
    info!(range = %range, mode = %config.scan.mode, workers, "starting scan");

    let start = Timestamp::now();
    let outcome = match config.scan.mode {
        ScanMode::Sequential => sequential::scan(range, &decomposer),
        ScanMode::Parallel => ParallelScanner::new(workers)
            .with_chunk_size(config.scan.chunk_size)
            .scan(range, &decomposer),
    };
    let elapsed = start.elapsed();

    let best = match outcome {
        Ok(best) => best,
        Err(GoldbachError::InvalidInput(e)) => return Err(e.into()),
        Err(e) => return Err(e).with_context(|| format!("Scan of {} failed", range)),
    };

    let scanned = range.count();
    let rate = calculate_rate(scanned.to_u64().unwrap_or(u64::MAX), elapsed);
    info!(
        result = %best,
        numbers = %scanned,
        elapsed = %format_duration_human(elapsed),
        rate = %format_rate(rate),
        "scan finished"
    );

    Ok((best, workers, elapsed))
}
